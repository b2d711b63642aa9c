// Decodes a fixed document holding a wrapped color and checks that it is blue.
//
// Run with `RUST_LOG=debug` to see the library's tracing events.

use color_enum::{Color, Wrapper};
use serde::Deserialize;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Thing {
    color: Wrapper,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let the_color = Color::Red;
    println!("Color is: {}", the_color);
    the_color.do_thing(io::stdout())?;

    let thing: Thing = color_enum::codec::from_str(r#"{"color":"blue"}"#)?;
    println!("{{{}}}", thing.color);

    if thing.color != Color::Blue {
        return Err(format!("expected blue, got {:?}", thing).into());
    }

    if let Some(color) = thing.color.color() {
        color.do_thing(io::stdout())?;
    }

    Ok(())
}
