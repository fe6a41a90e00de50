use clap::Parser;
use qimen_core::{
    ApproxSolarTerms, ChartError, ChartOptions, MeanSolarOffset, Moment, Pan, build_chart,
    build_chart_with_correction,
};
use qimen_tables::Palace;

#[derive(Parser)]
#[command(name = "qimen", about = "Qi Men Dun Jia chart generator")]
struct Cli {
    /// Observation moment, local civil time (YYYY-MM-DDTHH:MM)
    #[arg(long)]
    moment: String,
    /// UTC offset of the moment in hours
    #[arg(long, default_value = "8")]
    utc_offset: f64,
    /// Observer longitude in degrees east; enables mean solar-time correction
    #[arg(long)]
    longitude: Option<f64>,
    /// Palace ordinal the center borrows (2 or 8)
    #[arg(long, default_value = "2")]
    center_host: u8,
}

fn field(part: Option<&str>) -> Result<i64, ChartError> {
    part.and_then(|s| s.parse().ok())
        .ok_or(ChartError::InvalidMoment("expected YYYY-MM-DDTHH:MM"))
}

fn parse_moment(raw: &str) -> Result<Moment, ChartError> {
    let (date, time) = raw
        .split_once(['T', ' '])
        .ok_or(ChartError::InvalidMoment("expected YYYY-MM-DDTHH:MM"))?;
    let mut d = date.splitn(3, '-');
    let mut t = time.splitn(3, ':');
    let year = field(d.next())? as i32;
    let month = field(d.next())? as u32;
    let day = field(d.next())? as u32;
    let hour = field(t.next())? as u32;
    let minute = field(t.next())? as u32;
    Moment::new(year, month, day, hour, minute)
}

fn run(cli: &Cli) -> Result<Pan, ChartError> {
    let moment = parse_moment(&cli.moment)?;
    let host = match cli.center_host {
        2 => Palace::Kun,
        8 => Palace::Gen,
        _ => return Err(ChartError::InvalidMoment("center host must be 2 or 8")),
    };
    let options = ChartOptions {
        center_host: host,
        ..ChartOptions::default()
    };
    let source = ApproxSolarTerms {
        utc_offset_hours: cli.utc_offset,
    };
    match cli.longitude {
        Some(lon) => {
            let correction = MeanSolarOffset::from_longitude(lon, cli.utc_offset);
            build_chart_with_correction(&moment, &correction, &source, &options)
        }
        None => build_chart(&moment, &source, &options),
    }
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(pan) => {
            println!("{}", cli.moment);
            print!("{pan}");
        }
        Err(e) => {
            eprintln!("qimen: {e}");
            std::process::exit(1);
        }
    }
}
