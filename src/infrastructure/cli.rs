use std::path::PathBuf;

use clap::Parser;

use crate::{domain::filter::Filter, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "CSV",
        help = "Complaint dataset to load (overrides data.path in the config)"
    )]
    pub data: Option<PathBuf>,

    #[arg(
        short,
        long = "borough",
        value_name = "NAME",
        help = "Only keep rows from this borough (repeatable)"
    )]
    pub boroughs: Vec<String>,

    #[arg(
        short = 'c',
        long = "complaint-type",
        value_name = "TYPE",
        help = "Only keep rows of this complaint type (repeatable)"
    )]
    pub complaint_types: Vec<String>,

    #[arg(
        long,
        value_name = "DAYS",
        help = "Only keep rows resolved within this many days"
    )]
    pub max_days: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Where the export key writes the filtered rows"
    )]
    pub export: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Print the metrics and borough counts, then exit"
    )]
    pub summary: bool,

    #[arg(long, requires = "summary", help = "Print the summary as JSON")]
    pub json: bool,
}

impl Cli {
    /// Filter from the command line; each option given replaces the matching
    /// part of `base`.
    pub fn filter(&self, base: &Filter) -> Filter {
        let mut filter = base.clone();
        if !self.boroughs.is_empty() {
            filter.boroughs.clone_from(&self.boroughs);
        }
        if !self.complaint_types.is_empty() {
            filter.complaint_types.clone_from(&self.complaint_types);
        }
        if self.max_days.is_some() {
            filter.max_response_days = self.max_days;
        }
        filter
    }
}
