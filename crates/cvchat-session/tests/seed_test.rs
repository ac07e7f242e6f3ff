use cvchat_search::{AwardEntry, BasicInfo, ProjectEntry, ResumeSummary, WorkEntry};
use cvchat_session::seed::{build_seed, RESUME_DELIMITER, SEED_PREAMBLE};

fn alice() -> ResumeSummary {
    ResumeSummary {
        basic_info: BasicInfo {
            full_name: "Alice".to_string(),
            university: "MIT".to_string(),
            education_level: "BSc".to_string(),
            gpa: 3.5,
        },
        summary: "Backend engineer".to_string(),
        skills: vec!["Go".to_string(), "Rust".to_string()],
        work_experience: vec![WorkEntry {
            job_title: "Eng".to_string(),
            company: "X".to_string(),
            duration: "1y".to_string(),
        }],
        project_experience: vec![ProjectEntry {
            project_name: "Indexer".to_string(),
            project_description: "search pipeline".to_string(),
        }],
        award: vec![AwardEntry {
            award_name: "Hackathon winner".to_string(),
        }],
    }
}

#[test]
fn empty_document_list_yields_preamble_only() {
    assert_eq!(build_seed(&[]), SEED_PREAMBLE);
}

#[test]
fn seed_contains_every_section_in_order() {
    let seed = build_seed(&[alice()]);

    assert!(seed.starts_with(SEED_PREAMBLE));
    assert!(seed.contains("Name: Alice; "));
    assert!(seed.contains("Summary: Backend engineer; Skills: Go, Rust; "));
    assert!(seed.contains("Education: MIT, BSc, GPA: 3.50; "));
    assert!(seed.contains("Work Experience: Eng at X, 1y; "));
    assert!(seed.contains("Projects: Indexer: search pipeline; "));
    assert!(seed.contains("Awards: Hackathon winner; "));

    let name_pos = seed.find("Name:").unwrap();
    let summary_pos = seed.find("Summary:").unwrap();
    let education_pos = seed.find("Education:").unwrap();
    let work_pos = seed.find("Work Experience:").unwrap();
    let projects_pos = seed.find("Projects:").unwrap();
    let awards_pos = seed.find("Awards:").unwrap();
    assert!(name_pos < summary_pos);
    assert!(summary_pos < education_pos);
    assert!(education_pos < work_pos);
    assert!(work_pos < projects_pos);
    assert!(projects_pos < awards_pos);
}

#[test]
fn each_resume_block_ends_with_delimiter() {
    let seed = build_seed(&[alice(), alice()]);
    assert_eq!(seed.matches(RESUME_DELIMITER).count(), 2);
    assert!(seed.ends_with(RESUME_DELIMITER));
}

#[test]
fn sparse_resume_still_produces_section_headers() {
    let seed = build_seed(&[ResumeSummary::default()]);

    assert!(seed.contains("Name: ; "));
    assert!(seed.contains("Work Experience: Projects: Awards: "));
}

#[test]
fn construction_is_deterministic() {
    let docs = vec![alice(), alice()];
    assert_eq!(build_seed(&docs), build_seed(&docs));
}
