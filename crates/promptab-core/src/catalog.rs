//! Built-in categories and their prompt variants.

use crate::model::{Category, Variant};
use std::collections::BTreeMap;

/// Immutable set of categories and the variants tested for each of them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    variants: BTreeMap<String, Vec<Variant>>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, variants: BTreeMap<String, Vec<Variant>>) -> Self {
        Self {
            categories,
            variants,
        }
    }

    /// The three agent categories exercised by a default run.
    pub fn builtin() -> Self {
        let categories = vec![
            category(
                "cofounder",
                &[
                    "strategic_clarity",
                    "socratic_effectiveness",
                    "requirement_coverage",
                ],
                20,
                &[
                    "Build a social media app",
                    "Improve user retention for SaaS",
                    "Create an e-commerce platform",
                ],
            ),
            category(
                "parallel-worker",
                &[
                    "task_coordination",
                    "dependency_management",
                    "status_tracking",
                ],
                15,
                &[
                    "Multi-component feature development",
                    "System migration project",
                    "Performance optimization tasks",
                ],
            ),
            category(
                "specialist-agents",
                &["code_quality", "completion_rate", "xml_compliance"],
                25,
                &[
                    "Backend API implementation",
                    "Frontend component creation",
                    "Database optimization",
                ],
            ),
        ];

        let mut variants = BTreeMap::new();
        variants.insert(
            "cofounder".to_string(),
            vec![
                variant(
                    "A_enhanced_socratic",
                    "Enhanced Socratic questioning with deeper probing",
                    &[
                        "Add progressive questioning depth levels",
                        "Include assumption validation steps",
                        "Strengthen requirement clarification",
                    ],
                    &[
                        ("questioning_depth", "increased"),
                        ("validation_loops", "added"),
                        ("assumption_checking", "mandatory"),
                    ],
                ),
                variant(
                    "B_structured_brief",
                    "More structured strategic brief generation",
                    &[
                        "Add formal PRP template sections",
                        "Include explicit stakeholder analysis",
                        "Strengthen success criteria definition",
                    ],
                    &[
                        ("template_structure", "formalized"),
                        ("stakeholder_analysis", "explicit"),
                        ("success_criteria", "quantitative"),
                    ],
                ),
            ],
        );
        variants.insert(
            "parallel-worker".to_string(),
            vec![
                variant(
                    "A_enhanced_coordination",
                    "Improved task coordination and dependency management",
                    &[
                        "Add explicit dependency validation",
                        "Include progress tracking checkpoints",
                        "Strengthen error handling protocols",
                    ],
                    &[
                        ("dependency_validation", "mandatory"),
                        ("progress_checkpoints", "regular"),
                        ("error_handling", "comprehensive"),
                    ],
                ),
                variant(
                    "B_xml_focused",
                    "Enhanced XML operations and status tracking",
                    &[
                        "Add XML validation steps",
                        "Include status transition protocols",
                        "Strengthen audit trail generation",
                    ],
                    &[
                        ("xml_validation", "systematic"),
                        ("status_transitions", "validated"),
                        ("audit_trails", "comprehensive"),
                    ],
                ),
            ],
        );
        variants.insert(
            "specialist-agents".to_string(),
            vec![
                variant(
                    "A_quality_focused",
                    "Enhanced code quality and testing requirements",
                    &[
                        "Add mandatory test coverage targets",
                        "Include code review checkpoints",
                        "Strengthen documentation requirements",
                    ],
                    &[
                        ("test_coverage", "90%_minimum"),
                        ("code_review", "mandatory"),
                        ("documentation", "comprehensive"),
                    ],
                ),
                variant(
                    "B_compliance_focused",
                    "Enhanced XML compliance and protocol adherence",
                    &[
                        "Add XML schema validation checks",
                        "Include status update protocols",
                        "Strengthen completion criteria",
                    ],
                    &[
                        ("xml_compliance", "validated"),
                        ("status_updates", "mandatory"),
                        ("completion_criteria", "explicit"),
                    ],
                ),
            ],
        );

        Self::new(categories, variants)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Variants registered for `category`. Unknown names yield an empty slice.
    pub fn variants_for(&self, category: &str) -> &[Variant] {
        self.variants
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn category(name: &str, metrics: &[&str], target: u32, scenarios: &[&str]) -> Category {
    Category {
        name: name.to_string(),
        metrics: metrics.iter().map(|s| s.to_string()).collect(),
        target_improvement: target,
        test_scenarios: scenarios.iter().map(|s| s.to_string()).collect(),
    }
}

fn variant(
    name: &str,
    description: &str,
    modifications: &[&str],
    prompt_changes: &[(&str, &str)],
) -> Variant {
    Variant {
        variant: name.to_string(),
        description: description.to_string(),
        modifications: modifications.iter().map(|s| s.to_string()).collect(),
        prompt_changes: prompt_changes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}
