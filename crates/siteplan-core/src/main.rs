use clap::{Arg, Command};
use siteplan_core::prelude::*;
use siteplan_generator::{GeneratorConfig, HttpGenerator};
use siteplan_projection::{plan_view, solid_view};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("siteplan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Headless core of the prompt-driven site-scene editor")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("validate")
                .about("Schema-check a scene JSON file")
                .arg(Arg::new("file").required(true).help("Path to a scene JSON file")),
        )
        .subcommand(
            Command::new("export")
                .about("Write the scene as scene-layout.json")
                .arg(
                    Arg::new("scene")
                        .long("scene")
                        .help("Scene JSON file (defaults to the built-in startup scene)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .help("Output directory"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Apply a natural-language edit through the configured generator")
                .arg(
                    Arg::new("instruction")
                        .long("instruction")
                        .required(true)
                        .help("The edit instruction, e.g. 'Make the warehouse roof blue'"),
                )
                .arg(
                    Arg::new("scene")
                        .long("scene")
                        .help("Scene JSON file (defaults to the built-in startup scene)"),
                )
                .arg(
                    Arg::new("out")
                        .long("out")
                        .default_value(".")
                        .help("Directory for the updated scene-layout.json"),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Print a summary of the derived 2D/3D projections")
                .arg(
                    Arg::new("scene")
                        .long("scene")
                        .help("Scene JSON file (defaults to the built-in startup scene)"),
                ),
        );

    match cli.get_matches().subcommand() {
        Some(("validate", args)) => {
            let file = args.get_one::<String>("file").expect("required arg");
            let text = std::fs::read_to_string(file)?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            match siteplan_scene::validate(&value) {
                Ok(()) => println!("{file}: scene is valid"),
                Err(violation) => {
                    eprintln!("{file}: {violation}");
                    std::process::exit(1);
                }
            }
        }
        Some(("export", args)) => {
            let scene = load_scene(args.get_one::<String>("scene"))?;
            let out = args.get_one::<String>("out").expect("defaulted arg");
            let path = siteplan_core::write_export(&scene, Path::new(out))?;
            println!("exported {}", path.display());
        }
        Some(("edit", args)) => {
            let instruction = args.get_one::<String>("instruction").expect("required arg");
            let scene = load_scene(args.get_one::<String>("scene"))?;
            let out = args.get_one::<String>("out").expect("defaulted arg");

            let store = Arc::new(SceneStore::with_scene(scene));
            let generator = Arc::new(HttpGenerator::new(GeneratorConfig::from_env()));
            let orchestrator = EditOrchestrator::new(Arc::clone(&store), generator);

            match orchestrator.submit_prompt(instruction).await? {
                PromptOutcome::Question => {
                    println!("Classified as a question; no edit applied.");
                }
                PromptOutcome::Edited(report) => {
                    if report.lock_auto_disabled {
                        println!("Structure lock was automatically disabled to move an element.");
                    }
                    if report.positions_restored {
                        println!("Generator moved locked elements; positional changes were discarded.");
                    }
                    let path = siteplan_core::write_export(&store.scene(), Path::new(out))?;
                    println!("edit applied; exported {}", path.display());
                }
            }
        }
        Some(("view", args)) => {
            let scene = load_scene(args.get_one::<String>("scene"))?;
            let plan = plan_view(&scene);
            let solid = solid_view(&scene);

            println!("2D schematic:");
            println!("  plot: {}x{}m, {} mask hole(s)", plan.plot.outline.w, plan.plot.outline.h, plan.plot.holes.len());
            println!("  roads: {} path(s), width {}m", plan.roads.len(), scene.roads.width);
            println!("  footprints: {}", plan.footprints.len());
            println!("  trees: {}", plan.trees.len());
            println!("  fountain: {}", if plan.fountain.is_some() { "yes" } else { "no" });
            println!("3D view:");
            println!("  blocks: {}", solid.blocks.len());
            println!("  pitched roof: {}", if solid.roof.is_some() { "yes" } else { "no" });
        }
        _ => {}
    }

    Ok(())
}

fn load_scene(path: Option<&String>) -> anyhow::Result<Scene> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            Ok(siteplan_scene::parse_scene(value)?)
        }
        None => Ok(initial_scene()),
    }
}
