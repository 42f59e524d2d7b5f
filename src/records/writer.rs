//! CSV output of ordered records

use std::io::Write;

use super::user::UserRecord;

/// Write records as CSV with a `username,password,creation_date` header
pub fn write_records<W: Write>(
    writer: W,
    records: &[UserRecord],
    delimiter: u8,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_original_dates() {
        let records = vec![
            UserRecord::parse("user3", "pass3", "2022-12-25", "%Y-%m-%d").unwrap(),
            UserRecord::parse("admin", "pass,word", "2023-01-01", "%Y-%m-%d").unwrap(),
        ];

        let mut out = Vec::new();
        write_records(&mut out, &records, b',').unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "username,password,creation_date\n\
             user3,pass3,2022-12-25\n\
             admin,\"pass,word\",2023-01-01\n"
        );
    }
}
