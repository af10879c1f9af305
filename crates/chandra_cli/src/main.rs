use anyhow::Context;
use clap::{Parser, Subcommand};
use chandra_ephem::{AnalyticEphemeris, Body, EphemerisSource};
use chandra_search::{
    IngressConfig, IngressKind, Snapshot, SnapshotConfig, compute_snapshot,
    find_next_ingress_of_kind,
};
use chandra_time::UtcTime;
use chandra_vedic::{
    AyanamshaModel, AyanamshaSystem, deg_to_dms, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_elongation,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chandra", version, about = "Sidereal Moon position and ingress CLI")]
struct Cli {
    /// Emit debug-level search traces on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Tithi from Moon-Sun elongation
    Tithi {
        /// Elongation in degrees
        #[arg(allow_negative_numbers = true)]
        elong: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Ayanamsha value at a date
    Ayanamsha {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
        /// Ayanamsha system (lahiri, kp, raman, fagan-bradley, yukteshwar)
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
    },
    /// Tropical and sidereal Moon longitude at a date
    Sidereal {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
    },
    /// Next rashi or nakshatra ingress of the Moon
    NextIngress {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
        /// Boundary grid: rashi or nakshatra
        #[arg(long, default_value = "rashi")]
        kind: IngressKind,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
        /// Search horizon in days
        #[arg(long, default_value = "3")]
        horizon_days: f64,
    },
    /// Full lunar snapshot at a date
    Snapshot {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        date: Option<UtcTime>,
        /// Ayanamsha system
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CHANDRA_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let eph = AnalyticEphemeris::new();

    match cli.command {
        Commands::Rashi { lon } => println!("{}", format_rashi(lon)),

        Commands::Nakshatra { lon } => println!("{}", format_nakshatra(lon)),

        Commands::Tithi { elong } => println!("{}", format_tithi(elong)),

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }

        Commands::Ayanamsha { date, system } => {
            let utc = date.unwrap_or_else(UtcTime::now);
            let model = AyanamshaModel::from_system(system);
            let aya = model.ayanamsha_deg(utc.to_jd_utc());
            let d = deg_to_dms(aya);
            println!("{} ayanamsha at {utc}", system.name());
            println!("  {aya:.6} deg ({d})");
        }

        Commands::Sidereal { date, system } => {
            let utc = date.unwrap_or_else(UtcTime::now);
            let jd = utc.to_jd_utc();
            let model = AyanamshaModel::from_system(system);
            let tropical = eph
                .tropical_longitude(Body::Moon, jd)
                .context("Moon longitude unavailable")?;
            let aya = model.ayanamsha_deg(jd);
            println!("Moon at {utc}");
            println!("  Tropical:  {tropical:.6} deg");
            println!("  Ayanamsha: {aya:.6} deg ({})", system.name());
            println!(
                "  Sidereal:  {:.6} deg",
                model.sidereal_longitude(tropical, jd)
            );
        }

        Commands::NextIngress {
            date,
            kind,
            system,
            horizon_days,
        } => {
            let utc = date.unwrap_or_else(UtcTime::now);
            let config = IngressConfig::moon().with_horizon_days(horizon_days);
            let model = AyanamshaModel::from_system(system);
            tracing::debug!(%utc, %kind, %system, horizon_days, "searching next ingress");
            let event = find_next_ingress_of_kind(
                &eph,
                &model,
                Body::Moon,
                utc.to_jd_utc(),
                kind,
                &config,
            )
            .with_context(|| format!("{kind} ingress search failed"))?;
            match event {
                Some(e) => println!(
                    "Next {kind} ingress: {} (index {}, {:.4} deg) at {}",
                    kind.boundary_name(e.boundary_index),
                    e.boundary_index,
                    e.boundary_deg,
                    e.when
                ),
                None => println!("Next {kind} ingress: unknown (none within {horizon_days} days)"),
            }
        }

        Commands::Snapshot { date, system, json } => {
            let utc = date.unwrap_or_else(UtcTime::now);
            let config = SnapshotConfig {
                ayanamsha: AyanamshaModel::from_system(system),
                ..SnapshotConfig::default()
            };
            let snap = compute_snapshot(&eph, &config, &utc).context("snapshot failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snap)?);
            } else {
                print!("{}", format_snapshot(&snap));
            }
        }
    }

    Ok(())
}

fn format_rashi(lon: f64) -> String {
    let info = rashi_from_longitude(lon);
    let dms = info.dms;
    format!(
        "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
        info.rashi.name(),
        info.rashi.western_name(),
        dms.degrees,
        dms.minutes,
        dms.seconds,
        info.degrees_in_rashi
    )
}

fn format_nakshatra(lon: f64) -> String {
    let info = nakshatra_from_longitude(lon);
    format!(
        "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
        info.nakshatra.name(),
        info.nakshatra_index,
        info.pada,
        info.degrees_in_nakshatra,
        info.degrees_in_pada
    )
}

fn format_tithi(elong: f64) -> String {
    let t = tithi_from_elongation(elong);
    format!(
        "Tithi {} - {} {} ({} of paksha, {:.4} deg elongation)",
        t.tithi_number,
        t.paksha.name(),
        t.name(),
        t.tithi_in_paksha,
        t.elongation_deg
    )
}

fn format_snapshot(snap: &Snapshot) -> String {
    let ingress = |s: Option<chandra_search::IngressSummary>| match s {
        Some(i) => format!("{} (index {}) at {}", i.boundary_name, i.boundary_index, i.when),
        None => "unknown".to_string(),
    };
    let mut out = String::new();
    out += &format!("Moon at {}\n", snap.instant);
    out += &format!("  Sidereal longitude: {} deg\n", snap.longitude_deg);
    out += &format!(
        "  Rashi:     {} (index {}) - {} deg in sign\n",
        snap.rashi.name, snap.rashi.index, snap.rashi.degrees_in_sign
    );
    out += &format!(
        "  Nakshatra: {} (index {}) - Pada {} ({} deg into nakshatra)\n",
        snap.nakshatra.name, snap.nakshatra.index, snap.nakshatra.pada, snap.nakshatra.degrees_into
    );
    out += &format!(
        "  Tithi:     {} - {} {} ({} deg elongation)\n",
        snap.tithi.number,
        snap.tithi.paksha.name(),
        snap.tithi.name,
        snap.tithi.elongation_deg
    );
    out += &format!("  Next rashi ingress:     {}\n", ingress(snap.next_rashi_ingress));
    out += &format!("  Next nakshatra ingress: {}\n", ingress(snap.next_nakshatra_ingress));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_snapshot_args() {
        let cli = Cli::try_parse_from([
            "chandra",
            "snapshot",
            "--date",
            "2025-08-08T12:00:00Z",
            "--system",
            "kp",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Snapshot { date, system, json } => {
                assert_eq!(date.unwrap().to_string(), "2025-08-08T12:00:00.000Z");
                assert_eq!(system, AyanamshaSystem::Krishnamurti);
                assert!(json);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn rejects_bad_date_and_kind() {
        assert!(Cli::try_parse_from(["chandra", "ayanamsha", "--date", "yesterday"]).is_err());
        assert!(Cli::try_parse_from(["chandra", "next-ingress", "--kind", "tithi"]).is_err());
        assert!(Cli::try_parse_from(["chandra", "sidereal", "--system", "tropical"]).is_err());
    }

    #[test]
    fn negative_longitude_accepted() {
        let cli = Cli::try_parse_from(["chandra", "rashi", "-10"]).unwrap();
        assert!(matches!(cli.command, Commands::Rashi { lon } if lon == -10.0));
    }

    #[test]
    fn rashi_text() {
        assert_eq!(
            format_rashi(90.0),
            "Karka (Cancer) - 0 deg 0 min 0.0 sec (0.0000 deg in rashi)"
        );
    }

    #[test]
    fn nakshatra_text() {
        assert!(format_nakshatra(44.0).starts_with("Rohini (index 3) - Pada 2"));
    }

    #[test]
    fn tithi_text() {
        assert!(format_tithi(185.0).starts_with("Tithi 16 - Krishna Pratipada"));
    }

    #[test]
    fn snapshot_text_mentions_everything() {
        let utc: UtcTime = "2025-08-08T12:00:00Z".parse().unwrap();
        let snap =
            compute_snapshot(&AnalyticEphemeris::new(), &SnapshotConfig::default(), &utc).unwrap();
        let text = format_snapshot(&snap);
        assert!(text.contains("Makara"));
        assert!(text.contains("Shravana"));
        assert!(text.contains("Shukla"));
        assert!(text.contains("Kumbha"));
    }
}
