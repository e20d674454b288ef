//! `ljpw score`: every scalar summary of one vector.

use std::path::Path;

use clap::Args;
use ljpw_core::{harmony_relative_to, Ljpw, ReferencePoint, ScoreCard};
use tracing::info;

use super::{finish, load_config};

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Vector as "L,J,P,W", e.g. "0.7,0.5,0.8,0.75"
    #[arg(allow_hyphen_values = true)]
    pub vector: String,

    /// Print the score card as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_score(args: ScoreArgs, config_path: Option<&Path>) -> i32 {
    finish("score", run(&args, config_path))
}

fn run(args: &ScoreArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let vector: Ljpw = args.vector.parse()?;
    vector.validate_finite()?;

    let card = ScoreCard::with_config(&vector, &config.phase);
    info!(vector = %vector, harmony = card.harmony, phase = %card.phase, "scored vector");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&card)?);
    } else {
        print!("{}", render(&card));
    }
    Ok(())
}

fn fmt_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6}", v),
        None => "undefined (non-positive component)".to_string(),
    }
}

pub(crate) fn render(card: &ScoreCard) -> String {
    let equilibrium_harmony = harmony_relative_to(&card.vector, ReferencePoint::NaturalEquilibrium);
    let mut out = String::new();
    out.push_str(&format!("Vector:                  {:.6}\n", card.vector));
    out.push_str(&format!("Arithmetic mean:         {:.6}\n", card.arithmetic_mean));
    out.push_str(&format!(
        "Geometric mean:          {}\n",
        fmt_optional(card.geometric_mean)
    ));
    out.push_str(&format!(
        "Harmonic mean:           {}\n",
        fmt_optional(card.harmonic_mean)
    ));
    out.push_str(&format!("Harmony index:           {:.6}\n", card.harmony));
    out.push_str(&format!("Harmony (equilibrium):   {:.6}\n", equilibrium_harmony));
    out.push_str(&format!(
        "Distance to anchor:      {:.6}\n",
        card.distance_to_anchor
    ));
    out.push_str(&format!(
        "Distance to equilibrium: {:.6}\n",
        card.distance_to_equilibrium
    ));
    out.push_str(&format!(
        "Phase:                   {} ({})\n",
        card.phase,
        card.phase.description()
    ));
    out
}
