use crate::global_settings::GlobalSettings;
use anyhow::{Context, Result};
use intervals_lib::IntervalCollection;
use itertools::Itertools;
use serde_json::json;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combine {
    Union,
    Intersection,
}

fn parse(expr: &str) -> Result<IntervalCollection> {
    IntervalCollection::parse(expr)
        .with_context(|| format!("Cannot evaluate {expr:?}"))
}

fn display(
    expr: &str,
    result: &IntervalCollection,
    settings: &GlobalSettings,
) -> Result<String> {
    if settings.json {
        Ok(serde_json::to_string(&json!({
            "expression": expr,
            "text": result.to_string(),
            "intervals": result,
        }))?)
    } else {
        Ok(result.to_string())
    }
}

/// Show the canonical form of each expression, one per line
pub fn eval_view(exprs: &[&str], settings: &GlobalSettings) -> Result<String> {
    exprs
        .iter()
        .map(|expr| display(expr, &parse(expr)?, settings))
        .process_results(|mut lines| lines.join("\n"))
}

/// Combine all expressions from left to right
pub fn combine_view(
    exprs: &[&str],
    how: Combine,
    settings: &GlobalSettings,
) -> Result<String> {
    let mut iter = exprs.iter();
    let Some(first) = iter.next() else {
        anyhow::bail!("No expression given");
    };
    let mut result = parse(first)?;
    for expr in iter {
        let operand = parse(expr)?;
        match how {
            Combine::Union => result.union(operand)?,
            Combine::Intersection => result.intersection(operand)?,
        };
    }
    let op = match how {
        Combine::Union => " or ",
        Combine::Intersection => " and ",
    };
    display(
        &exprs.iter().map(|e| format!("({e})")).join(op),
        &result,
        settings,
    )
}
