mod dialect;
pub use dialect::{classify, Descriptors};

use clap::ValueEnum;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Method {
    #[value(name = "CFA")]
    Cfa,
    #[value(name = "A-GEM")]
    AGem,
    #[value(name = "ER")]
    Er,
    #[value(name = "iCarl")]
    ICarl,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Cfa => "CFA",
            Method::AGem => "A-GEM",
            Method::Er => "ER",
            Method::ICarl => "iCarl",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Methods in reporting order.
pub const DEFAULT_METHODS: [Method; 4] = [Method::Cfa, Method::AGem, Method::Er, Method::ICarl];

/// Buffer sizes in reporting order.
pub const DEFAULT_SAMPLES: [u32; 4] = [10, 20, 50, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AggregationKey {
    pub method: Method,
    pub samples: u32,
}

impl AggregationKey {
    pub fn new(method: Method, samples: u32) -> Self {
        Self { method, samples }
    }
}

impl fmt::Display for AggregationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.method, self.samples)
    }
}

/// Every (method, samples) pair, samples outer and methods inner.
pub fn enumerate_keys(samples: &[u32], methods: &[Method]) -> Vec<AggregationKey> {
    samples
        .iter()
        .flat_map(|&n| methods.iter().map(move |&m| AggregationKey::new(m, n)))
        .collect()
}
