//! bountiful categories - List configured resource categories

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputMode, emit_human, emit_json, robot_ok};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CategoriesArgs {}

pub fn run(ctx: &AppContext, _args: &CategoriesArgs) -> Result<()> {
    let categories = &ctx.config.categories;

    if ctx.output_mode == OutputMode::Robot {
        return emit_json(&robot_ok(categories));
    }

    let mut layout = HumanLayout::new();
    layout.section("Categories");
    for category in categories {
        layout.kv(
            &category.name,
            &format!("{}/*.{} ({})", category.path, category.extension, category.kind),
        );
    }
    emit_human(layout);
    Ok(())
}
