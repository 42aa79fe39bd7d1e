mod args;
mod contains_view;
mod eval_view;
mod global_settings;

use crate::args::{build_cli, get_expressions};
use crate::contains_view::contains_view;
use crate::eval_view::{combine_view, eval_view, Combine};
use crate::global_settings::GlobalSettings;
use anyhow::Result;

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let settings = GlobalSettings::new(&args);

    env_logger::Builder::new()
        .filter_level(settings.log_level())
        .parse_default_env()
        .init();

    let output = match args.subcommand() {
        Some(("eval", sub)) => eval_view(&get_expressions(sub), &settings)?,
        Some(("contains", sub)) => {
            let values = sub
                .get_many::<String>("values")
                .map(|v| v.map(String::as_str).collect::<Vec<_>>())
                .unwrap_or_default();
            let expr = get_expressions(sub);
            contains_view(
                expr.first().copied().unwrap_or_default(),
                &values,
                &settings,
            )?
        }
        Some(("union", sub)) => {
            combine_view(&get_expressions(sub), Combine::Union, &settings)?
        }
        Some(("intersect", sub)) => combine_view(
            &get_expressions(sub),
            Combine::Intersection,
            &settings,
        )?,
        Some(("completions", sub)) => {
            if let Some(shell) =
                sub.get_one::<clap_complete_command::Shell>("shell")
            {
                shell.generate(&mut build_cli(), &mut std::io::stdout());
            }
            return Ok(());
        }
        Some((cmd, _)) => anyhow::bail!("Unknown command {cmd}"),
        None => anyhow::bail!("No command given"),
    };

    println!("{output}");
    Ok(())
}
