use crate::methods::Method;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "Continual learning accuracy scraper")]
#[command(author = "Antodyn <antodyn@163.com>")]
#[command(version = "0.1")]
#[command(about = "Per-task accuracy mean and 95% interval from training logs", long_about = None)]
pub struct Scraper {
    /// log files or directories of logs, read in the given order
    #[arg(default_values = ["cifar100_part1.txt", "cifar100_part2.txt"])]
    pub files: Vec<PathBuf>,

    /// buffer sizes to report
    #[arg(short, long, num_args = 1.., default_values_t = [10u32, 20, 50, 100])]
    pub samples: Vec<u32>,

    /// methods to report
    #[arg(short, long, value_enum, num_args = 1.., default_values_t = [Method::Cfa, Method::AGem, Method::Er, Method::ICarl])]
    pub methods: Vec<Method>,

    /// decimals printed for mean and interval
    #[arg(short, long, default_value_t = 2)]
    pub decimals: usize,

    /// skip (method, samples) pairs without episodes instead of failing
    #[arg(long, default_value_t = false)]
    pub allow_missing: bool,

    /// also write a timestamped log file here
    #[arg(short, long)]
    pub log_dir: Option<PathBuf>,

    /// more console logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Scraper {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
