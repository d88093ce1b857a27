use clap::{Parser, Subcommand};

use jyotish_muhurta::{EventKind, SearchFilters, choghadiya_for_date, horas_for_date};
use jyotish_rs::{
    Moment, calculate_chart, calculate_daily_calendar, find_windows, score_compatibility,
};
use jyotish_vedic::Ayanamsha;

#[derive(Parser)]
#[command(name = "jyotish", about = "Jyotish calculation core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart for a birth moment and place
    Kundali {
        /// UTC birth datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        datetime: String,
        /// Birth latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Birth longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Ayanamsha name (lahiri, raman, krishnamurti, yukteshwar,
        /// true_chitrapaksha); unknown names fall back to lahiri
        #[arg(long, default_value = "lahiri")]
        ayanamsa: String,
    },
    /// Daily panchang for a date and place
    Panchang {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Auspicious windows for an event within a date range
    Muhurta {
        /// Event kind (marriage, travel, griha_pravesh, ...)
        #[arg(long)]
        event: String,
        /// Range start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Range end date (YYYY-MM-DD), at most 90 days after start
        #[arg(long)]
        end: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        /// Maximum windows to report
        #[arg(long, default_value = "20")]
        max_results: usize,
    },
    /// Marriage compatibility from mansion/sign numbers
    Guna {
        /// Bride nakshatra number (1-27)
        #[arg(long)]
        bride_nakshatra: u8,
        /// Bride rashi number (1-12)
        #[arg(long)]
        bride_rashi: u8,
        /// Groom nakshatra number (1-27)
        #[arg(long)]
        groom_nakshatra: u8,
        /// Groom rashi number (1-12)
        #[arg(long)]
        groom_rashi: u8,
    },
    /// Choghadiya segments for a date and place
    Choghadiya {
        #[arg(long)]
        date: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Planetary horas for a date and place
    Hora {
        #[arg(long)]
        date: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
}

fn parse_moment(s: &str) -> Moment {
    match s.parse() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("error: cannot parse '{s}': {e}");
            std::process::exit(2);
        }
    }
}

fn emit<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Kundali {
            datetime,
            lat,
            lon,
            ayanamsa,
        } => {
            let moment = parse_moment(&datetime);
            let chart = calculate_chart(&moment, lat, lon, &ayanamsa)
                .map_err(|e| e.to_string())?;
            emit(&chart);
        }
        Commands::Panchang { date, lat, lon } => {
            let date = parse_moment(&date);
            let panchang =
                calculate_daily_calendar(&date, lat, lon).map_err(|e| e.to_string())?;
            emit(&panchang);
        }
        Commands::Muhurta {
            event,
            start,
            end,
            lat,
            lon,
            max_results,
        } => {
            let event = EventKind::from_name(&event)
                .ok_or_else(|| format!("unknown event kind '{event}'"))?;
            let start = parse_moment(&start);
            let end = parse_moment(&end);
            let filters = SearchFilters {
                max_results,
                ..Default::default()
            };
            let search = find_windows(event, &start, &end, lat, lon, &filters)
                .map_err(|e| e.to_string())?;
            emit(&search);
        }
        Commands::Guna {
            bride_nakshatra,
            bride_rashi,
            groom_nakshatra,
            groom_rashi,
        } => {
            let result =
                score_compatibility(bride_nakshatra, bride_rashi, groom_nakshatra, groom_rashi)
                    .map_err(|e| e.to_string())?;
            emit(&result);
        }
        Commands::Choghadiya { date, lat, lon } => {
            let date = parse_moment(&date);
            let table = choghadiya_for_date(&date, lat, lon, Ayanamsha::default())
                .map_err(|e| e.to_string())?;
            emit(&table);
        }
        Commands::Hora { date, lat, lon } => {
            let date = parse_moment(&date);
            let table = horas_for_date(&date, lat, lon, Ayanamsha::default())
                .map_err(|e| e.to_string())?;
            emit(&table);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(msg) = run(cli) {
        eprintln!("error: {msg}");
        std::process::exit(1);
    }
}
