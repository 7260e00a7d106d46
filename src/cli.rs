use clap::Parser;

pub const DEFAULT_POSITION_SOURCE: &str = "http://api.open-notify.org/iss-now.json";

#[derive(Parser, Debug)]
#[command(name = "isstrack", version, about = "ISS position tracker")]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON instead of the map")]
    pub json: bool,
    #[arg(
        long,
        default_value = DEFAULT_POSITION_SOURCE,
        help = "Position source (url, or a local JSON file)"
    )]
    pub source: String,
    #[arg(long, help = "Disable ANSI styling of the map marker")]
    pub plain: bool,
}
