mod config_spec;
mod util;
