use switchyard::derive::*;
use switchyard::prelude::*;
use switchyard::{ArgumentsBuilder, ArgumentsHandler};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ArgEnum)]
enum Mode {
    #[default]
    Debug,
    Release,
    #[switchyard(name = "rel-debug")]
    RelWithDebugInfo,
}

fn builder() -> ArgumentsBuilder {
    let mut builder = ArgumentsBuilder::new();
    builder
        .add_default("command", Some('c'))
        .expect("the first default option")
        .accept_string(None)
        .make_required()
        .with_description("The command to launch.");
    builder
        .add("directory", Some('d'))
        .expect("a distinct option")
        .accept_directory(true, Some("./"))
        .expect("the working directory exists")
        .with_description("The directory to launch from.");
    builder
        .add("retries", Some('r'))
        .expect("a distinct option")
        .accept_integer(Some(3))
        .with_description("How many times to retry the launch.");
    builder
        .add("mode", Some('m'))
        .expect("a distinct option")
        .accept_enum(Some(Mode::Debug));
    builder
        .add("verbose", Some('v'))
        .expect("a distinct option")
        .accept_flag();
    builder
        .add("help", Some('h'))
        .expect("a distinct option")
        .accept_flag()
        .with_description("Show this usage and exit.");
    builder
}

/// The exit status when the usage is shown instead of launching.
fn usage_status(handler: &ArgumentsHandler) -> Option<i32> {
    if handler.get_value::<bool>("help") {
        Some(0)
    } else if !handler.is_valid() {
        Some(1)
    } else {
        None
    }
}

fn main() {
    let handler = builder()
        .build()
        .expect("every option has a value provider");

    if let Some(status) = usage_status(&handler) {
        handler.print_usage("launcher", env!("CARGO_PKG_VERSION"), status != 0);
        std::process::exit(status);
    }

    let command: String = handler.get_value("command");
    let directory: String = handler.get_value("directory");
    let retries: u32 = handler.get_value("retries");
    let mode: Mode = handler.get_value("mode");

    if handler.get_value::<bool>("verbose") {
        println!("Launching '{command}' from '{directory}' ({mode:?}, {retries} retries).");
    } else {
        println!("Launching '{command}'.");
    }
}
