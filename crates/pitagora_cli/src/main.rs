use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pitagora_base::{
    ALL_PLANES, BirthDate, Diamond, NumerologyNumber, NumerologyResult, date_numbers, diamond,
    diamond_bases, existential_planes, name_numbers, reduce_number,
};
use pitagora_rs::{ConsultaResponse, reading, respond_json};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pitagora", about = "Pythagorean numerology CLI")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce an integer to one digit, flagging master and karmic values
    Reduce {
        /// Any integer (negative values use their absolute value)
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Name numbers: inner vibration, soul, personality, mission
    Name {
        /// Full name (several words allowed)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Existential planes of a name
    Planes {
        /// Full name (several words allowed)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Date numbers: talent, karma, past lives, life path, divine gift
    Date {
        /// Birth date (YYYY-MM-DD)
        date: String,
    },
    /// Diamond of realizations and challenges
    Diamond {
        /// Birth date (YYYY-MM-DD)
        date: String,
    },
    /// Full reading for a name and birth date
    Reading {
        /// Full name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer a JSON consultation ({"nombreCompleto", "fechaNacimiento"})
    Consult {
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_date(s: &str) -> BirthDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn read_body(input: Option<&PathBuf>) -> String {
    let body = match input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    body.unwrap_or_else(|e| {
        eprintln!("Failed to read request: {e}");
        std::process::exit(1);
    })
}

fn format_number(n: &NumerologyNumber) -> String {
    match n.kind() {
        Some(kind) => format!("{n} ({})", kind.name()),
        None => n.to_string(),
    }
}

fn print_number(label: &str, n: &NumerologyNumber) {
    println!("{label:<20} {}", format_number(n));
}

fn print_diamond(d: &Diamond) {
    let r = &d.realizaciones;
    let c = &d.desafios;
    println!("Realizaciones");
    print_number("  r1 (A+B)", &r.r1);
    print_number("  r2 (B+C)", &r.r2);
    print_number("  r3 (r1+r2)", &r.r3);
    print_number("  r4 (A+C)", &r.r4);
    println!("Desafios");
    print_number("  d1 |A-B|", &c.d1);
    print_number("  d2 |B-C|", &c.d2);
    print_number("  mayor |d1-d2|", &c.mayor);
    print_number("  extra |A-C|", &c.extra);
}

fn print_reading(r: &NumerologyResult) {
    println!("{} ({})", r.nombre_completo, r.fecha_nacimiento);
    println!();
    print_number("Vibracion interna", &r.vibracion_interna);
    print_number("Alma", &r.alma);
    print_number("Personalidad", &r.personalidad);
    print_number("Mision", &r.mision);
    println!();
    let p = &r.planes_existenciales;
    println!(
        "Planes: mental {} / fisico {} / emotivo {} / intuitivo {}",
        p.mental, p.fisico, p.emotivo, p.intuitivo
    );
    println!();
    print_number("Talento", &r.talento);
    print_number("Karma", &r.karma);
    print_number("Vidas pasadas", &r.vidas_pasadas);
    print_number("Camino de vida", &r.camino_de_vida);
    print_number("Regalo divino", &r.regalo_divino);
    println!();
    print_diamond(&r.diamante);
}

fn print_response(resp: &ConsultaResponse, pretty: bool) {
    let out = if pretty {
        resp.to_json_pretty()
    } else {
        resp.to_json()
    };
    match out {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to encode response: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Reduce { n } => {
            let num = reduce_number(n);
            println!("{n} -> {}", format_number(&num));
        }

        Commands::Name { name } => {
            let name = name.join(" ");
            let n = name_numbers(&name);
            print_number("Vibracion interna", &n.vibracion_interna);
            print_number("Alma", &n.alma);
            print_number("Personalidad", &n.personalidad);
            print_number("Mision", &n.mision);
            println!("Letras: {:?}", n.raw_numbers);
        }

        Commands::Planes { name } => {
            let name = name.join(" ");
            let planes = existential_planes(&name_numbers(&name).raw_numbers);
            for plane in ALL_PLANES {
                println!("{:<10} {}", plane.name(), planes.count(plane));
            }
            println!("{:<10} {}", "total", planes.total());
        }

        Commands::Date { date } => {
            let n = date_numbers(&require_date(&date));
            print_number("Talento", &n.talento);
            print_number("Karma", &n.karma);
            print_number("Vidas pasadas", &n.vidas_pasadas);
            print_number("Camino de vida", &n.camino_de_vida);
            print_number("Regalo divino", &n.regalo_divino);
        }

        Commands::Diamond { date } => {
            let date = require_date(&date);
            let (a, b, c) = diamond_bases(&date);
            println!("A (mes) {a} / B (dia) {b} / C (anio) {c}");
            print_diamond(&diamond(&date));
        }

        Commands::Reading { name, date, json } => {
            let r = reading(&name, &date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if json {
                print_response(&ConsultaResponse::from(r), true);
            } else {
                print_reading(&r);
            }
        }

        Commands::Consult { input, pretty } => {
            let body = read_body(input.as_ref());
            debug!(bytes = body.len(), "read consultation body");
            let resp = respond_json(&body);
            print_response(&resp, pretty);
            if !resp.is_success() {
                std::process::exit(1);
            }
        }
    }
}
