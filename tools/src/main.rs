//! lattice-runner: headless driver for the lattice spread simulation.
//!
//! Usage:
//!   lattice-runner --seed 12345 --generations 500
//!   lattice-runner --size 200 --rate 0.35 --mask seed_mask.json
//!   lattice-runner --ipc-mode

use anyhow::Result;
use contagion_core::{
    command::DriverCommand,
    config::SimConfig,
    engine::SimEngine,
    lattice::{Lattice, SeedMask},
    stats::LatticeStats,
    types::Generation,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick {
        count: u64,
    },
    Command {
        cmd: String,
        payload: serde_json::Value,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    generation:      Generation,
    size:            usize,
    spread_rate:     f64,
    affected_count:  u64,
    healthy_percent: f64,
    lattice:         Lattice,
}

/// File shape for --mask: raw dimensions plus cells, validated through
/// the SeedMask constructor rather than trusted as-is.
#[derive(serde::Deserialize)]
struct MaskFile {
    size:  usize,
    cells: Vec<bool>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let base = match flag_value(&args, "--config") {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let config = SimConfig {
        seed:        parse_arg(&args, "--seed", base.seed),
        size:        parse_arg(&args, "--size", base.size),
        spread_rate: parse_arg(&args, "--rate", base.spread_rate),
    };
    let generations = parse_arg(&args, "--generations", 100u64);

    let mask = match flag_value(&args, "--mask") {
        Some(path) => Some(load_mask(path)?),
        None => None,
    };

    if !ipc_mode {
        println!("lattice-runner");
        println!("  seed:        {}", config.seed);
        println!("  size:        {}", config.size);
        println!("  rate:        {}", config.spread_rate);
        println!("  generations: {generations}");
        println!();
    }

    let run_id = format!("run-{}-{}", config.seed, unix_secs());
    let mut engine = SimEngine::new(run_id, &config, mask.as_ref())?;

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        engine.run_generations(generations)?;
        print_summary(&engine, generations);
        if let Some(path) = flag_value(&args, "--snapshot-out") {
            std::fs::write(path, engine.snapshot().to_json()?)?;
            log::info!("snapshot written to {path}");
        }
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut SimEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Tick { count } => {
                match engine.run_generations(count) {
                    Ok(_) => writeln!(stdout, "{}", serde_json::to_string(&build_ui_state(engine))?)?,
                    Err(e) => {
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{}", err_json)?;
                    }
                }
            }
            IpcCommand::GetState => {
                writeln!(stdout, "{}", serde_json::to_string(&build_ui_state(engine))?)?;
            }
            IpcCommand::Command { cmd, payload } => {
                match handle_command(engine, &cmd, payload) {
                    Ok(()) => writeln!(stdout, "{}", serde_json::to_string(&build_ui_state(engine))?)?,
                    Err(e) => {
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        writeln!(stdout, "{}", err_json)?;
                    }
                }
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(engine: &mut SimEngine, cmd: &str, payload: serde_json::Value) -> Result<()> {
    match cmd {
        "set_rate" => {
            let rate = payload["rate"].as_f64().unwrap_or(f64::NAN);
            engine.apply(&DriverCommand::SetSpreadRate { rate })?;
        }
        "reset" => {
            engine.apply(&DriverCommand::Reset)?;
        }
        _ => log::warn!("Unknown command: {}", cmd),
    }
    Ok(())
}

fn build_ui_state(engine: &SimEngine) -> UiState {
    let LatticeStats {
        affected_count,
        healthy_percent,
        ..
    } = engine.statistics();

    UiState {
        generation: engine.generation(),
        size: engine.lattice().size(),
        spread_rate: engine.spread_rate(),
        affected_count,
        healthy_percent,
        lattice: engine.lattice().clone(),
    }
}

fn print_summary(engine: &SimEngine, generations: u64) {
    let stats = engine.statistics();

    println!("=== RUN SUMMARY ===");
    println!("  run_id:          {}", engine.run_id);
    println!("  generations run: {generations}");
    println!("  final gen:       {}", engine.generation());
    println!("  lattice:         {0}x{0}", engine.lattice().size());
    println!("  spread rate:     {}", engine.spread_rate());
    println!("  affected:        {}", stats.affected_count);
    println!("  healthy:         {}", stats.healthy_count);
    println!("  healthy %:       {:.2}", stats.healthy_percent);
}

fn load_mask(path: &str) -> Result<SeedMask> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    let file: MaskFile = serde_json::from_str(&content)?;
    Ok(SeedMask::new(file.size, file.cells)?)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn unix_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
