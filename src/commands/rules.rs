use crate::config::build_rule_table;
use crate::core::ErrorType;
use crate::rules::{CompiledRule, Topic};
use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RulesFilter {
    pub error_type: Option<String>,
    pub topic: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn handle_rules(filter: RulesFilter) -> Result<()> {
    let settings = super::load_settings(filter.config.as_deref())?;
    let table = build_rule_table(&settings)?;
    let error_type = filter
        .error_type
        .as_deref()
        .map(str::parse::<ErrorType>)
        .transpose()?;
    let topic = filter.topic.as_deref().map(str::parse::<Topic>).transpose()?;

    let selected: Vec<_> = table
        .rules()
        .iter()
        .filter(|rule| error_type.map_or(true, |e| rule.applies_to(e)))
        .filter(|rule| topic.map_or(true, |t| rule.topic == t))
        .collect();

    println!("{}", render_table(&selected));
    println!("{} of {} rules", selected.len(), table.len());
    Ok(())
}

pub fn render_table(rules: &[&CompiledRule]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Priority", "Topic", "Confidence", "Verdicts"]);

    for rule in rules {
        let verdicts = rule
            .error_types()
            .iter()
            .map(ErrorType::code)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            rule.id.clone(),
            rule.max_priority().to_string(),
            rule.topic.to_string(),
            rule.payload.confidence.to_string(),
            verdicts,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleTable;

    #[test]
    fn test_render_lists_every_rule() {
        let table = RuleTable::standard().unwrap();
        let heap: Vec<_> = table.rules().iter().filter(|r| r.topic == Topic::Heap).collect();
        let rendered = render_table(&heap).to_string();
        assert!(rendered.contains("HEAP_EMPTY_ACCESS"));
        assert!(rendered.contains("Verdicts"));
        assert!(!rendered.contains("STACK_EMPTY_ACCESS"));
    }
}
