use log::LevelFilter;

pub fn init() {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    let _ = builder.try_init();
}
