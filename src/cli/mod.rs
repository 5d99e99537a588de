mod args;

pub(crate) use args::{CliArgs, parse_cli};
