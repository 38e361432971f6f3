use log::{debug, error};
use mealdb_decode::{decode_lookup_with, decode_meal_list, DecoderConfig, RecordNormalizer};
use std::env;
use std::fs;
use std::io::{self, Read};

const USAGE: &str = "Usage: mealdb-decode [lookup|list] [PATH]";

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (mode, path) = match args.first().map(String::as_str) {
        Some("lookup") | Some("list") => (args[0].as_str(), args.get(1).map(String::as_str)),
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        other => ("lookup", other),
    };

    let config = DecoderConfig::load()?;
    debug!("Decoder configuration: {:?}", config);
    let body = read_input(path)?;

    let output = match mode {
        "list" => decode_meal_list(&body).map(|meals| serde_json::to_string_pretty(&meals)),
        _ => decode_lookup_with(&RecordNormalizer::new(config), &body)
            .map(|meal| serde_json::to_string_pretty(&meal)),
    };

    match output {
        Ok(json) => {
            println!("{}", json?);
            Ok(())
        }
        Err(e) => {
            error!("Unable to decode the {mode} response: {e}");
            Err(e.into())
        }
    }
}
