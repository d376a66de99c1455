use crate::corpus::DocId;
use crate::relevance::Relevance;
use crate::snippet::Snippet;
use serde::Serialize;
use std::fmt;

pub const SEPARATOR: &str = "-----------";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub doc_id: DocId,
    pub file_name: String,
    pub category: String,
    pub score: f64,
    pub paragraph_count: u32,
    pub word_count: u32,
    pub snippet: Snippet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub query: String,
    pub terms: Vec<String>,
    /// Documents that scored before the threshold cut.
    pub matched: usize,
    pub threshold: Option<f64>,
    pub hits: Vec<Hit>,
    pub relevance: Relevance,
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SNIPPET: {}", self.text)?;
        if self.truncated {
            write!(f, " ...")?;
        }
        writeln!(f, " (PARAGRAPH #{})", self.paragraph)?;
        if !self.also_relevant.is_empty() {
            let list: Vec<String> = self.also_relevant.iter().map(u32::to_string).collect();
            writeln!(f, "OTHER HIGHLY RELEVANT PARAGRAPHS: {}", list.join("  "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relevance::Measured(m) => {
                writeln!(f, "PRECISION: {:.2}%", m.precision * 100.0)?;
                writeln!(f, "RECALL: {:.2}%", m.recall * 100.0)
            }
            Relevance::NotComputable => {
                writeln!(
                    f,
                    "The provided query does not have underlying document stats collected."
                )?;
                writeln!(f, "Precision could not be calculated.")?;
                writeln!(f, "Recall could not be calculated.")
            }
        }
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "QUERY: {}", self.query)?;
        if self.hits.is_empty() {
            writeln!(f, "NO MATCHING DOCUMENTS")?;
        }
        for hit in &self.hits {
            writeln!(f, "FILE NAME: {}", hit.file_name)?;
            writeln!(f, "TOTAL PARAGRAPH COUNT: {}", hit.paragraph_count)?;
            writeln!(f, "APPROXIMATE WORD COUNT: {}", hit.word_count)?;
            write!(f, "{}", hit.snippet)?;
            writeln!(f, "{SEPARATOR}")?;
        }
        write!(f, "{}", self.relevance)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relevance::Measurement;

    fn hit() -> Hit {
        Hit {
            doc_id: 4,
            file_name: "lidstrom.docx".into(),
            category: "NikLidstrom".into(),
            score: 0.12,
            paragraph_count: 9,
            word_count: 412,
            snippet: Snippet {
                paragraph: 2,
                text: "Seven Norris trophies".into(),
                truncated: true,
                also_relevant: vec![5, 7],
            },
        }
    }

    #[test]
    fn renders_text_report() {
        let report = QueryReport {
            query: "Lidstrom Norris".into(),
            terms: vec!["lidstrom".into(), "norri".into()],
            matched: 1,
            threshold: None,
            hits: vec![hit()],
            relevance: Relevance::Measured(Measurement {
                category: "NikLidstrom".into(),
                true_positives: 1,
                selected: 1,
                relevant: 3,
                precision: 1.0,
                recall: 1.0 / 3.0,
            }),
        };
        let expected = "QUERY: Lidstrom Norris\n\
FILE NAME: lidstrom.docx\n\
TOTAL PARAGRAPH COUNT: 9\n\
APPROXIMATE WORD COUNT: 412\n\
SNIPPET: Seven Norris trophies ... (PARAGRAPH #2)\n\
OTHER HIGHLY RELEVANT PARAGRAPHS: 5  7\n\
-----------\n\
PRECISION: 100.00%\n\
RECALL: 33.33%\n\
\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn renders_empty_report() {
        let report = QueryReport {
            query: "the and of".into(),
            terms: vec![],
            matched: 0,
            threshold: None,
            hits: vec![],
            relevance: Relevance::NotComputable,
        };
        let text = report.to_string();
        assert!(text.starts_with("QUERY: the and of\nNO MATCHING DOCUMENTS\n"));
        assert!(
            text.contains("Precision could not be calculated.\nRecall could not be calculated.\n")
        );
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(hit()).unwrap();
        assert_eq!(json["file_name"], "lidstrom.docx");
        assert_eq!(json["snippet"]["also_relevant"], serde_json::json!([5, 7]));
        let relevance = serde_json::to_value(Relevance::NotComputable).unwrap();
        assert_eq!(relevance["status"], "not_computable");
    }
}
