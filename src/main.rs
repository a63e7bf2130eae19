use std::env;

use log::{error, info, warn};

use dockbox::config::Config;
use dockbox::error::{parse_f64, DockboxError, Result};
use dockbox::model::BoundingBox;
use dockbox::selection::Selection;
use dockbox::{io, pocket, report};

const USAGE: &str = "\
dockbox - box information for LeDock, AutoDock Vina and AutoDock

Usage:
  dockbox getbox <file> [--select EXPR] [--extending N] [--json] [--quiet]
      Box around the selected atoms (default selection: all).
      Selecting the ligand or cavity residues reported in papers is
      recommended.
        e.g. dockbox getbox receptor.pdb --select \"resn HEM\" --extending 6.0

  dockbox autobox <file> [--chain ID] [--extending N] [--json] [--quiet]
      Autodetect the pocket from the HETATM records of one chain (solvent
      and common ions are ignored). Fails for too many ligands or no ligand.

  dockbox resibox <file> <residues> [--chain ID] [--extending N] [--json] [--quiet]
      Box around the given residues, restricted to one chain.
        e.g. dockbox resibox receptor.pdb \"resi 214+226+245\" --extending 8.0

  dockbox showbox <minX> <maxX> <minY> <maxY> <minZ> <maxZ> [--json] [--quiet]
      Box from explicit bounds, to visualize or amend a published box.

  dockbox vinabox <cx> <cy> <cz> <sx> <sy> <sz> [--json] [--quiet]
      Box from Vina-style center and size numbers.

  dockbox rmhet <file> <output>
      Write a copy of the structure with all HETATM records removed.

  dockbox config [--save]
      Show (and optionally persist) the active defaults.
";

struct Opts {
    positional: Vec<String>,
    select: Option<String>,
    chain: Option<String>,
    extending: Option<f64>,
    json: bool,
    quiet: bool,
    save: bool,
}

fn parse_opts(args: &[String]) -> Result<Opts> {
    let mut opts = Opts {
        positional: Vec::new(),
        select: None,
        chain: None,
        extending: None,
        json: false,
        quiet: false,
        save: false,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--select" => {
                let v = iter.next().ok_or_else(|| missing_value("--select"))?;
                opts.select = Some(v.clone());
            }
            "--chain" => {
                let v = iter.next().ok_or_else(|| missing_value("--chain"))?;
                opts.chain = Some(v.clone());
            }
            "--extending" => {
                let v = iter.next().ok_or_else(|| missing_value("--extending"))?;
                opts.extending = Some(parse_f64(v)?);
            }
            "--json" => opts.json = true,
            "--quiet" => opts.quiet = true,
            "--save" => opts.save = true,
            other => opts.positional.push(other.to_string()),
        }
    }
    Ok(opts)
}

fn missing_value(flag: &str) -> DockboxError {
    DockboxError::Usage(format!("{} needs a value", flag))
}

/// Prints the three docking-tool blocks the way the original plugin did:
/// Vina first, then the AutoDock grid option, then LeDock, then the
/// replayable box code.
fn print_box(b: &BoundingBox, cfg: &Config, json: bool, quiet: bool) -> Result<()> {
    if json {
        println!("{}", report::json(b)?);
        return Ok(());
    }

    let banner = cfg.banner && !quiet;
    if banner {
        println!("*********AutoDock Vina Binding Pocket*********");
    }
    print!("{}", report::vina(b));
    if banner {
        println!("*********AutoDock Grid Option*********");
    }
    print!("{}", report::autogrid(b));
    if banner {
        println!("*********LeDock Binding Pocket*********");
    }
    print!("{}", report::ledock(b));
    if !quiet {
        println!("BoxCode = {}", report::box_code(b));
    }
    Ok(())
}

fn require(positional: &[String], n: usize, what: &str) -> Result<()> {
    if positional.len() < n {
        return Err(DockboxError::Usage(format!("{} (see dockbox help)", what)));
    }
    Ok(())
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first().map(|s| s.as_str()) else {
        print!("{}", USAGE);
        return Ok(());
    };

    let (cfg, cfg_msg) = Config::load();
    info!("{}", cfg_msg);

    let opts = parse_opts(&args[1..])?;
    let extending = opts.extending.unwrap_or(cfg.default_extending);
    let chain = opts.chain.clone().unwrap_or_else(|| cfg.default_chain.clone());

    match command {
        "getbox" => {
            require(&opts.positional, 1, "getbox needs a structure file")?;
            let structure = io::load_structure(&opts.positional[0])?;
            info!(
                "Loaded {} atoms from {}",
                structure.atoms.len(),
                opts.positional[0]
            );
            let selection = match &opts.select {
                Some(text) => Selection::parse(text)?,
                None => {
                    warn!("No selection given, boxing the whole structure");
                    Selection::All
                }
            };
            let b = pocket::getbox(&structure, &selection, extending)?;
            print_box(&b, &cfg, opts.json, opts.quiet)?;
        }
        "autobox" => {
            require(&opts.positional, 1, "autobox needs a structure file")?;
            let structure = io::load_structure(&opts.positional[0])?;
            let b = pocket::autobox(&structure, &chain, extending)?;
            print_box(&b, &cfg, opts.json, opts.quiet)?;
        }
        "resibox" => {
            require(&opts.positional, 2, "resibox needs a file and residues")?;
            let structure = io::load_structure(&opts.positional[0])?;
            let b = pocket::resibox(&structure, &opts.positional[1], &chain, extending)?;
            print_box(&b, &cfg, opts.json, opts.quiet)?;
        }
        "showbox" => {
            require(&opts.positional, 6, "showbox needs six bounds")?;
            let v: Vec<f64> = opts.positional[..6]
                .iter()
                .map(|s| parse_f64(s))
                .collect::<Result<_>>()?;
            let b = pocket::showbox(v[0], v[1], v[2], v[3], v[4], v[5]);
            print_box(&b, &cfg, opts.json, opts.quiet)?;
        }
        "vinabox" => {
            require(&opts.positional, 6, "vinabox needs center and size")?;
            let v: Vec<f64> = opts.positional[..6]
                .iter()
                .map(|s| parse_f64(s))
                .collect::<Result<_>>()?;
            let b = pocket::vinabox(v[0], v[1], v[2], v[3], v[4], v[5]);
            print_box(&b, &cfg, opts.json, opts.quiet)?;
        }
        "rmhet" => {
            require(&opts.positional, 2, "rmhet needs input and output files")?;
            let structure = io::load_structure(&opts.positional[0])?;
            let stripped = pocket::rmhet(&structure);
            io::save_structure(&opts.positional[1], &stripped)?;
            info!("Wrote {}", opts.positional[1]);
        }
        "config" => {
            println!("{}", serde_json::to_string_pretty(&cfg)?);
            if opts.save {
                info!("{}", cfg.save());
            }
        }
        "help" | "-h" | "--help" => print!("{}", USAGE),
        other => {
            error!("Unknown command {:?}", other);
            print!("{}", USAGE);
            std::process::exit(2);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
