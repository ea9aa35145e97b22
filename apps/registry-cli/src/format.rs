//! Terminal rendering for student records

use domain_students::StudentRecord;

/// Render a record as the aligned field/value block the menu prints.
///
/// Unset columns render as `-` (any non-key column can be null; see the
/// model docs).
pub fn render_record(record: &StudentRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("student_id : {}\n", record.student_id));
    out.push_str(&format!("roll       : {}\n", text_field(&record.student_roll)));
    out.push_str(&format!("name       : {}\n", record.full_name()));
    out.push_str(&format!("email      : {}\n", text_field(&record.email)));
    out.push_str(&format!(
        "dob        : {}\n",
        record
            .dob
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!("course     : {}\n", text_field(&record.course)));
    out.push_str(&format!(
        "year       : {}\n",
        record
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    out.push_str(&format!(
        "created_at : {}",
        record
            .created_at
            .map(|ts| ts.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    out
}

fn text_field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_render_full_record() {
        let id = Uuid::new_v4();
        let record = StudentRecord {
            student_id: id,
            student_roll: Some("R001".to_string()),
            first_name: Some("Asha".to_string()),
            last_name: Some("Rao".to_string()),
            email: Some("asha@example.com".to_string()),
            dob: NaiveDate::from_ymd_opt(2005, 4, 10),
            course: Some("CS".to_string()),
            year: Some(2),
            created_at: None,
        };

        let rendered = render_record(&record);
        assert!(rendered.contains(&format!("student_id : {}", id)));
        assert!(rendered.contains("roll       : R001"));
        assert!(rendered.contains("name       : Asha Rao"));
        assert!(rendered.contains("email      : asha@example.com"));
        assert!(rendered.contains("dob        : 2005-04-10"));
        assert!(rendered.contains("course     : CS"));
        assert!(rendered.contains("year       : 2"));
    }

    #[test]
    fn test_render_partial_record_uses_dashes() {
        let record = StudentRecord {
            student_id: Uuid::new_v4(),
            student_roll: None,
            first_name: None,
            last_name: None,
            email: Some("ghost@example.com".to_string()),
            dob: None,
            course: None,
            year: None,
            created_at: None,
        };

        let rendered = render_record(&record);
        assert!(rendered.contains("roll       : -"));
        assert!(rendered.contains("year       : -"));
        assert!(rendered.contains("created_at : -"));
    }
}
