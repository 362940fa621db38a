//! bountiful rules - List entry validation rules

use clap::Args;
use console::style;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputMode, emit_human, emit_json, robot_ok};
use crate::error::Result;
use crate::lint::Validator;

#[derive(Args, Debug)]
pub struct RulesArgs {}

pub fn run(ctx: &AppContext, _args: &RulesArgs) -> Result<()> {
    let rules = Validator::builtin(ctx.config.validation.clone()).list_rules();

    if ctx.output_mode == OutputMode::Robot {
        return emit_json(&robot_ok(rules));
    }

    let mut layout = HumanLayout::new();
    layout.section("Entry rules");
    for rule in &rules {
        let id = if rule.disabled {
            format!("{} {}", style(&rule.id).dim(), style("(disabled)").dim())
        } else {
            style(&rule.id).cyan().to_string()
        };
        layout.bullet(&format!("{id} [{}] {}", rule.category, rule.description));
    }
    emit_human(layout);
    Ok(())
}
