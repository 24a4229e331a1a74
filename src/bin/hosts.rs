//! Command-line interface for hosts
//! This binary is used to inspect and edit hosts files through the document model.
//!
//! Usage:
//!   hosts list [--ip `<ip>`] [--domain `<domain>`]   - Print IP/domain pairs
//!   hosts get `<hostname>`                          - Look up the IP for a hostname
//!   hosts set `<hostname>` `<ip>`                     - Bind a hostname to an IP
//!   hosts set-many `<ip>` `<hostname>`...             - Bind several hostnames to one IP
//!   hosts remove `<hostname>`                       - Remove a hostname everywhere
//!   hosts render                                  - Print the normalized document

use clap::{Arg, ArgAction, Command};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

use hosts::hosts::config::{HostsConfig, Loader, OutputFormat};
use hosts::hosts::{load_hosts_file, system_hosts_path, HostsFile, IpDomainPair};

fn main() {
    let matches = Command::new("hosts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and editing hosts files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('F')
                .help("Path to the hosts file (defaults to the system hosts file)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("list")
                .about("Print IP/domain pairs, optionally filtered")
                .arg(Arg::new("ip").long("ip").help("Keep only this exact IP"))
                .arg(
                    Arg::new("domain")
                        .long("domain")
                        .help("Keep only pairs containing this hostname"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: 'table' or 'json'"),
                ),
        )
        .subcommand(
            Command::new("get")
                .about("Look up the IP bound to a hostname")
                .arg(Arg::new("hostname").required(true).index(1)),
        )
        .subcommand(
            Command::new("set")
                .about("Bind a hostname to an IP and save")
                .arg(Arg::new("hostname").required(true).index(1))
                .arg(Arg::new("ip").required(true).index(2)),
        )
        .subcommand(
            Command::new("set-many")
                .about("Bind several hostnames to one IP on a shared line and save")
                .arg(Arg::new("ip").required(true).index(1))
                .arg(
                    Arg::new("hostnames")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a hostname from every mapping and save")
                .arg(Arg::new("hostname").required(true).index(1)),
        )
        .subcommand(Command::new("render").about("Print the normalized document"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let config = load_config(
        matches.get_one::<String>("config"),
        matches
            .subcommand()
            .and_then(|(_, sub)| sub.try_get_one::<String>("format").ok().flatten()),
    );
    let path = hosts_file_path(matches.get_one::<String>("file"), &config);

    let mut file = load_hosts_file(&path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match matches.subcommand() {
        Some(("list", sub)) => {
            let pairs = file.filter_ip_domain_pairs(
                sub.get_one::<String>("ip").map(String::as_str),
                sub.get_one::<String>("domain").map(String::as_str),
            );
            print_pairs(pairs, &config);
        }
        Some(("get", sub)) => {
            let hostname = sub.get_one::<String>("hostname").unwrap();
            match file.get_host_ip(hostname) {
                Ok(ip) => println!("{}", ip),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(("set", sub)) => {
            let hostname = sub.get_one::<String>("hostname").unwrap();
            let ip = sub.get_one::<String>("ip").unwrap();
            if !hosts::hosts::lexing::is_domain(hostname) {
                log::warn!("{:?} does not look like a domain name", hostname);
            }
            run_mutation(&mut file, |file| file.set_host_ip(hostname, ip));
            println!("{} -> {}", hostname, ip);
        }
        Some(("set-many", sub)) => {
            let ip = sub.get_one::<String>("ip").unwrap();
            let hostnames: Vec<String> = sub
                .get_many::<String>("hostnames")
                .unwrap()
                .cloned()
                .collect();
            run_mutation(&mut file, |file| {
                file.set_multiple_host_ips(hostnames.clone(), ip)
            });
            println!("{} hostnames -> {}", hostnames.len(), ip);
        }
        Some(("remove", sub)) => {
            let hostname = sub.get_one::<String>("hostname").unwrap();
            let mut removed = false;
            run_mutation(&mut file, |file| {
                removed = file.remove_host(hostname)?;
                Ok(())
            });
            if removed {
                println!("removed {}", hostname);
            } else {
                println!("{} was not present", hostname);
            }
        }
        Some(("render", _)) => print!("{}", file),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Resolve configuration: embedded defaults, then the user file, then flags.
fn load_config(config_path: Option<&String>, format_flag: Option<&String>) -> HostsConfig {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        loader = loader.with_file(path);
    }
    if let Some(format) = format_flag {
        loader = loader
            .set_override("output.format", format.as_str())
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            });
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Flag beats config file beats platform default.
fn hosts_file_path(flag: Option<&String>, config: &HostsConfig) -> PathBuf {
    flag.map(PathBuf::from)
        .or_else(|| config.file.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(system_hosts_path)
}

fn run_mutation<F>(file: &mut HostsFile, mutate: F)
where
    F: FnOnce(&mut HostsFile) -> Result<(), hosts::hosts::HostsError>,
{
    let result = mutate(file).and_then(|()| file.save(None));
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_pairs(mut pairs: Vec<IpDomainPair>, config: &HostsConfig) {
    if config.output.sort {
        pairs.sort_by(|a, b| a.ip.cmp(&b.ip));
    }
    match config.output.format {
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&pairs).unwrap_or_else(|e| {
                eprintln!("Error formatting pairs: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        OutputFormat::Table => {
            for pair in &pairs {
                println!("{}\t{}", pair.ip, pair.domains.join(" "));
            }
        }
    }
}
