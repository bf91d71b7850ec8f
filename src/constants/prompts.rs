//! Prompt templates for each generation call. Placeholders are written as
//! `{name}` and filled by [`render`].

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const COURSE_OUTLINE_PROMPT: &str = "Create a course outline for '{topic}'.
For Chapters, give only chapter names, not the sub-chapter names.

Use this Output Format:

Course Name: <Fancy Course Name>
Course Description: <Course Description>
Time to complete(in hours): <duration>
Chapters:
<Chapter names in numbered list format>";

pub const MODULE_LIST_PROMPT: &str = "You will only generate common sub chapter names in a list for {chapter}
(course id: {course_id})
output format:
<numbered list of sub chapter names>

example:
1. Data types and Variables
2. Functions
3. Promises";

pub const MATERIAL_PROMPT: &str = "You will only generate detailed markdown reading material for the module
{module} as text paragraphs with numbered bullet points for the chapter in a given course.
If the topic is programming/coding related or a programming language, provide code
examples as fenced code blocks with a language tag for syntax highlighting.

example:
# heading
## sub-heading
material";

pub const SUMMARY_PROMPT: &str = "Summarize the following reading material: {material}";

pub const EXAMPLE_PROMPT: &str =
    "Generate an example for the following material (coding examples if programming related): {material}";

pub const MCQ_PROMPT: &str = "Generate 10 unique MCQ questions on {topic} and ensure the questions are
clear, concise, and cover a specific topic. Provide four distinct options for answers,
with only one correct answer clearly indicated. Do not include the topic name.

Number every question and use exactly this format for each one:

**1. Question:** What is the capital of France?
Options:
1. Berlin
2. Madrid
3. Paris
4. Rome
Correct Answer: 3. Paris";

pub const CLARIFY_DOUBT_PROMPT: &str = "Clarify my doubt: {doubt}";

pub const ANSWER_ANALYSIS_PROMPT: &str = "Please review my answers={answers} against the questions={questions}
and give me a detailed analysis with question, options, selected answer, correct answer,
and explanation, without giving an intro. Use exactly this format for each question:

**Question 1: <question text>**
* **Options:**
    1. <option>
    2. <option>
    3. <option>
    4. <option>
* **Selected Answer:** <selected option>
* **Correct Answer:** <correct option>
* **Explanation:** <one line explanation>";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("PLACEHOLDER is a valid regex pattern"));

/// Replaces each `{name}` placeholder with its value in one pass over the
/// template. Substituted values are never scanned for placeholders, and
/// unknown names are left as written.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |c: &Captures| {
            vars.iter()
                .find(|(name, _)| *name == &c[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| c[0].to_string())
        })
        .into_owned()
}
