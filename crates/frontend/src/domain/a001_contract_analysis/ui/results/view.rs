//! Analysis result display: the summary on top, key clauses and risks in
//! tabs, with count indicators that open the full list in a modal

use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_contract_analysis::aggregate::AnalysisResult;
use leptos::prelude::*;
use thaw::*;

pub const NO_DATA: &str = "No data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    KeyClauses,
    Risks,
}

impl ResultSection {
    pub const ALL: [ResultSection; 2] = [ResultSection::KeyClauses, ResultSection::Risks];

    pub fn key(self) -> &'static str {
        match self {
            ResultSection::KeyClauses => "key_clauses",
            ResultSection::Risks => "risks",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or(ResultSection::KeyClauses)
    }

    pub fn title(self) -> &'static str {
        match self {
            ResultSection::KeyClauses => "Key clauses",
            ResultSection::Risks => "Potential risks",
        }
    }

    pub fn items(self, result: &AnalysisResult) -> &[String] {
        match self {
            ResultSection::KeyClauses => &result.key_clauses,
            ResultSection::Risks => &result.potential_risks,
        }
    }

    pub fn tab_label(self, result: &AnalysisResult) -> String {
        format!("{} ({})", self.title(), self.items(result).len())
    }
}

fn summary_text(result: &AnalysisResult) -> String {
    if result.summary.trim().is_empty() {
        NO_DATA.to_string()
    } else {
        result.summary.clone()
    }
}

fn item_list(section: ResultSection, items: Vec<String>) -> AnyView {
    if items.is_empty() {
        return view! {
            <p style="color: var(--colorNeutralForeground3, #64748b);">{NO_DATA}</p>
        }
        .into_any();
    }
    let is_risk = section == ResultSection::Risks;
    view! {
        <ol style="margin: 0; padding-left: 24px; display: flex; flex-direction: column; gap: 6px;">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li style=if is_risk { "color: var(--color-error, #dc2626);" } else { "" }>
                            {item}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
pub fn ResultsView(result: AnalysisResult) -> impl IntoView {
    let result = StoredValue::new(result);
    let selected_tab = RwSignal::new(ResultSection::KeyClauses.key().to_string());
    let drill_down = RwSignal::new(None::<ResultSection>);

    let indicator = move |section: ResultSection| {
        let count = result.with_value(|r| section.items(r).len());
        view! {
            <button
                class="result-indicator"
                title="Show all"
                on:click=move |_| drill_down.set(Some(section))
            >
                <div style="font-size: 24px; font-weight: bold;">{count}</div>
                <div style="font-size: 13px; color: var(--colorNeutralForeground3, #64748b);">
                    {section.title()}
                </div>
            </button>
        }
    };

    view! {
        <div style="margin-top: 24px; display: flex; flex-direction: column; gap: 16px;">
            <div style="padding: 16px; background: var(--colorNeutralBackground1, #fff); border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 8px;">
                <h2 style="font-size: 18px; font-weight: 600; margin: 0 0 8px 0;">"Summary"</h2>
                <p style="white-space: pre-line; margin: 0;">{result.with_value(summary_text)}</p>
            </div>

            <Flex style="gap: 12px;">
                {indicator(ResultSection::KeyClauses)}
                {indicator(ResultSection::Risks)}
            </Flex>

            <TabList selected_value=selected_tab>
                {ResultSection::ALL
                    .into_iter()
                    .map(|section| {
                        let label = result.with_value(|r| section.tab_label(r));
                        view! { <Tab value=section.key()>{label}</Tab> }
                    })
                    .collect_view()}
            </TabList>

            <div style="padding: 16px; background: var(--colorNeutralBackground1, #fff); border: 1px solid var(--colorNeutralStroke2, #e2e8f0); border-radius: 8px;">
                {move || {
                    let section = ResultSection::from_key(&selected_tab.get());
                    item_list(section, result.with_value(|r| section.items(r).to_vec()))
                }}
            </div>

            {move || {
                drill_down
                    .get()
                    .map(|section| {
                        let items = result.with_value(|r| section.items(r).to_vec());
                        view! {
                            <Modal
                                title=format!("{} ({})", section.title(), items.len())
                                on_close=Callback::new(move |_| drill_down.set(None))
                            >
                                <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 12px; color: var(--colorNeutralForeground3, #64748b);">
                                    {icon("document")}
                                    {result.with_value(|r| format!("Document {}", r.short_hash()))}
                                </div>
                                {item_list(section, items)}
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            summary: "  ".to_string(),
            key_clauses: vec!["Term".to_string(), "Price".to_string()],
            potential_risks: vec![],
            document_hash: "0123456789abcdef".to_string(),
        }
    }

    #[test]
    fn test_tab_labels_carry_counts() {
        let result = sample();
        assert_eq!(ResultSection::KeyClauses.tab_label(&result), "Key clauses (2)");
        assert_eq!(ResultSection::Risks.tab_label(&result), "Potential risks (0)");
    }

    #[test]
    fn test_section_keys_round_trip() {
        for section in ResultSection::ALL {
            assert_eq!(ResultSection::from_key(section.key()), section);
        }
        assert_eq!(ResultSection::from_key("unknown"), ResultSection::KeyClauses);
    }

    #[test]
    fn test_items_keep_order_and_blank_summary_shows_placeholder() {
        let result = sample();
        assert_eq!(ResultSection::KeyClauses.items(&result), ["Term", "Price"]);
        assert!(ResultSection::Risks.items(&result).is_empty());
        assert_eq!(summary_text(&result), NO_DATA);
    }
}
