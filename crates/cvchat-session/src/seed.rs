use cvchat_search::ResumeSummary;

/// Instruction prefix for the synthetic user message that primes a thread.
pub const SEED_PREAMBLE: &str =
    "You will use these information to answer questions from the user while using markdown for clarity: ";

/// Literal delimiter between one resume's block and the next.
pub const RESUME_DELIMITER: &str = " | ";

/// Build the seed text blob for a document set.
///
/// Section order per resume is fixed: identity, summary + skills,
/// education, work history, projects, awards. The construction is
/// deterministic for the same document list.
pub fn build_seed(documents: &[ResumeSummary]) -> String {
    let mut out = String::from(SEED_PREAMBLE);

    for resume in documents {
        out.push_str(&format!("Name: {}; ", resume.basic_info.full_name));
        out.push_str(&format!(
            "Summary: {}; Skills: {}; ",
            resume.summary,
            resume.skills.join(", ")
        ));
        out.push_str(&format!(
            "Education: {}, {}, GPA: {:.2}; ",
            resume.basic_info.university,
            resume.basic_info.education_level,
            resume.basic_info.gpa
        ));

        out.push_str("Work Experience: ");
        for work in &resume.work_experience {
            out.push_str(&format!(
                "{} at {}, {}; ",
                work.job_title, work.company, work.duration
            ));
        }

        out.push_str("Projects: ");
        for project in &resume.project_experience {
            out.push_str(&format!(
                "{}: {}; ",
                project.project_name, project.project_description
            ));
        }

        out.push_str("Awards: ");
        for award in &resume.award {
            out.push_str(&format!("{}; ", award.award_name));
        }

        out.push_str(RESUME_DELIMITER);
    }

    out
}
