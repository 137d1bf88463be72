// Mock API payload types
// Constant documents the endpoints serialize; field names follow the wire
// format expected by the front-end (camelCase).

use serde::Serialize;

/// Resume template record
#[derive(Debug, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// The fixed template catalog, in display order
pub fn templates() -> [Template; 3] {
    [
        Template {
            id: "1",
            name: "Professional Executive",
            description: "Clean and professional design for executive roles",
            color: "from-blue-500 to-blue-700",
            icon: "fa-briefcase",
        },
        Template {
            id: "2",
            name: "Modern Tech",
            description: "Modern design perfect for tech professionals",
            color: "from-green-500 to-teal-600",
            icon: "fa-laptop-code",
        },
        Template {
            id: "3",
            name: "Creative Designer",
            description: "Creative layout for design professionals",
            color: "from-purple-500 to-pink-600",
            icon: "fa-palette",
        },
    ]
}

/// Full analysis document returned by the analyze endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub categories: Categories,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
    pub improvements: Improvements,
    pub ats_compatibility: AtsCompatibility,
}

/// Per-dimension review scores
#[derive(Debug, Serialize)]
pub struct Categories {
    pub content: ScoredCategory,
    pub formatting: ScoredCategory,
    pub keywords: KeywordReview,
    pub structure: ScoredCategory,
    pub tone: ScoredCategory,
}

#[derive(Debug, Serialize)]
pub struct ScoredCategory {
    pub score: u32,
    pub feedback: Vec<&'static str>,
    pub suggestions: Vec<&'static str>,
}

/// Keyword coverage review; unlike the other categories it reports the
/// matched and missing terms instead of freeform feedback
#[derive(Debug, Serialize)]
pub struct KeywordReview {
    pub score: u32,
    pub found: Vec<&'static str>,
    pub missing: Vec<&'static str>,
    pub suggestions: Vec<&'static str>,
}

/// Section-by-section improvement suggestions
#[derive(Debug, Serialize)]
pub struct Improvements {
    pub summary: Vec<&'static str>,
    pub experience: Vec<&'static str>,
    pub education: Vec<&'static str>,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AtsCompatibility {
    pub score: u32,
    pub issues: Vec<&'static str>,
    pub fixes: Vec<&'static str>,
}

/// The fixed analysis document
pub fn analysis_report() -> AnalysisReport {
    AnalysisReport {
        ats_score: 85,
        categories: Categories {
            content: ScoredCategory {
                score: 80,
                feedback: vec!["Good content structure", "Clear experience descriptions"],
                suggestions: vec![
                    "Add more quantifiable achievements",
                    "Include action verbs",
                ],
            },
            formatting: ScoredCategory {
                score: 85,
                feedback: vec!["Clean layout", "Good use of white space"],
                suggestions: vec![
                    "Ensure consistent formatting",
                    "Use bullet points effectively",
                ],
            },
            keywords: KeywordReview {
                score: 75,
                found: vec!["project management", "team leadership", "communication"],
                missing: vec!["data analysis", "problem solving", "strategic planning"],
                suggestions: vec![
                    "Add industry-specific keywords",
                    "Include technical skills",
                ],
            },
            structure: ScoredCategory {
                score: 90,
                feedback: vec!["Well-organized sections", "Logical flow"],
                suggestions: vec![
                    "Add professional summary",
                    "Ensure section order is optimal",
                ],
            },
            tone: ScoredCategory {
                score: 75,
                feedback: vec!["Professional tone", "Clear communication"],
                suggestions: vec![
                    "Use more active language",
                    "Strengthen achievement statements",
                ],
            },
        },
        strengths: vec![
            "Strong experience section",
            "Good educational background",
            "Professional presentation",
        ],
        weaknesses: vec![
            "Limited quantifiable achievements",
            "Could use more keywords",
            "Summary section needs improvement",
        ],
        improvements: Improvements {
            summary: vec![
                "Add a 2-3 sentence professional summary",
                "Highlight key qualifications",
            ],
            experience: vec!["Quantify achievements with numbers", "Use more action verbs"],
            education: vec![
                "Add graduation date if missing",
                "Include relevant coursework",
            ],
            skills: vec![
                "Create a dedicated skills section",
                "Group technical and soft skills",
            ],
        },
        ats_compatibility: AtsCompatibility {
            score: 85,
            issues: vec![
                "Some formatting may affect ATS parsing",
                "Missing keywords for target roles",
            ],
            fixes: vec![
                "Use standard section headers",
                "Add industry-specific terminology",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_ids_and_order() {
        let templates = templates();
        let ids: Vec<&str> = templates.iter().map(|t| t.id).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        for template in &templates {
            assert!(!template.name.is_empty());
            assert!(!template.description.is_empty());
            assert!(!template.color.is_empty());
            assert!(!template.icon.is_empty());
        }
    }

    #[test]
    fn test_analysis_report_top_level_keys() {
        let value = serde_json::to_value(analysis_report()).unwrap();
        let report = value.as_object().unwrap();
        for key in [
            "atsScore",
            "categories",
            "strengths",
            "weaknesses",
            "improvements",
            "atsCompatibility",
        ] {
            assert!(report.contains_key(key), "missing top-level key {key}");
        }
        assert_eq!(report.len(), 6);
        assert_eq!(report["atsScore"], 85);
    }

    #[test]
    fn test_analysis_report_category_keys() {
        let value = serde_json::to_value(analysis_report()).unwrap();
        let categories = value["categories"].as_object().unwrap();
        let mut keys: Vec<&str> = categories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["content", "formatting", "keywords", "structure", "tone"]
        );

        // Keyword review reports term lists, the rest report feedback
        let keywords = categories["keywords"].as_object().unwrap();
        assert!(keywords.contains_key("found"));
        assert!(keywords.contains_key("missing"));
        assert!(keywords.contains_key("suggestions"));
        let content = categories["content"].as_object().unwrap();
        assert!(content.contains_key("feedback"));
        assert!(content.contains_key("suggestions"));
    }

    #[test]
    fn test_improvements_sections() {
        let value = serde_json::to_value(analysis_report()).unwrap();
        let improvements = value["improvements"].as_object().unwrap();
        let mut keys: Vec<&str> = improvements.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["education", "experience", "skills", "summary"]);
    }
}
