use chrono::NaiveDate;

/// Rows are ordered key/value pairs; the header row comes from the first
/// record's keys. Every field is quoted, embedded quotes are doubled, and
/// every line (the last included) ends in CRLF so spreadsheet imports behave.
pub fn to_csv<K, V>(records: &[Vec<(K, V)>]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let Some(first) = records.first() else {
        return String::new();
    };

    let mut out = String::new();
    push_line(&mut out, first.iter().map(|(key, _)| key.as_ref()));
    for record in records {
        push_line(&mut out, record.iter().map(|(_, value)| value.as_ref()));
    }

    out
}

pub fn export_filename(stem: &str, date: NaiveDate) -> String {
    format!("{stem}_{date}.csv")
}

fn push_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (index, field) in fields.enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        let records: Vec<Vec<(&str, String)>> = Vec::new();
        assert_eq!(to_csv(&records), "");
    }

    #[test]
    fn header_comes_from_first_record() {
        let records = vec![
            vec![("source", "AdSense".to_string()), ("amount", "50.00".to_string())],
            vec![("source", "Sponsor".to_string()), ("amount", "120.00".to_string())],
        ];

        let csv = to_csv(&records);
        assert!(csv.ends_with("\r\n"));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "\"source\",\"amount\"");
        assert_eq!(lines[1], "\"AdSense\",\"50.00\"");
        assert_eq!(lines[2], "\"Sponsor\",\"120.00\"");
    }

    #[test]
    fn quotes_are_doubled_and_commas_stay_inside_fields() {
        let records = vec![vec![
            ("content", "say \"hi\", then wave".to_string()),
            ("notes", "plain".to_string()),
        ]];

        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "\"say \"\"hi\"\", then wave\",\"plain\"");
    }

    #[test]
    fn embedded_newlines_stay_quoted() {
        let records = vec![vec![("notes", "line one\nline two".to_string())]];
        let csv = to_csv(&records);
        let rows: Vec<&str> = csv.split("\r\n").collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "\"line one\nline two\"");
        assert_eq!(rows[2], "");
    }

    #[test]
    fn filenames_are_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(export_filename("scheduled_posts", date), "scheduled_posts_2026-08-25.csv");
    }
}
