use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub fn build_log_config(scraper: &crate::core::parser::Scraper) -> anyhow::Result<log4rs::Config> {
    let level = scraper.level();

    // Stdout, so skipped-episode warnings land next to the results they affect.
    let stdout = ConsoleAppender::builder()
        .target(Target::Stdout)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(level)))
            .build("stdout", Box::new(stdout)),
    );
    let mut root = Root::builder().appender("stdout");

    if let Some(dir) = &scraper.log_dir {
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
        let log_path = dir.join(chrono::Local::now().format("%Y%m-%d--%H:%M:%S").to_string() + ".log");

        // Everything goes to the file.
        let logfile = FileAppender::builder()
            // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
            .encoder(Box::new(PatternEncoder::new(
                "{d(%+)(utc)} [{f}:{L}] {h({l})} -> {m}{n}",
            )))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root = root.appender("logfile");
    }

    let root_level = if scraper.log_dir.is_some() {
        log::LevelFilter::Trace
    } else {
        level
    };
    Ok(builder.build(root.build(root_level))?)
}
