//! Complaint records and the datasets built from them

pub const RESPONSE_TIME_COLUMN: &str = "response_time_days";
pub const COMPLAINT_TYPE_COLUMN: &str = "complaint_type";
pub const BOROUGH_COLUMN: &str = "borough";

/// Column layout used by [`Dataset::from_records`].
pub const DEFAULT_COLUMNS: [&str; 3] = [COMPLAINT_TYPE_COLUMN, BOROUGH_COLUMN, RESPONSE_TIME_COLUMN];

/// One row of the dataset.
///
/// The typed fields are what the aggregations consume; `cells` holds every raw
/// value of the row in column order so the table view can show the full record.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintRecord {
    response_time_days: f64,
    complaint_type: String,
    borough: String,
    cells: Vec<String>,
}

impl ComplaintRecord {
    /// Creates a record laid out as [`DEFAULT_COLUMNS`].
    pub fn new(
        response_time_days: f64,
        complaint_type: impl Into<String>,
        borough: impl Into<String>,
    ) -> Self {
        let complaint_type = complaint_type.into();
        let borough = borough.into();
        let cells = vec![
            complaint_type.clone(),
            borough.clone(),
            response_time_days.to_string(),
        ];
        Self {
            response_time_days,
            complaint_type,
            borough,
            cells,
        }
    }

    /// Replaces the raw cells, e.g. with the full row read from a CSV file.
    pub fn with_cells(mut self, cells: Vec<String>) -> Self {
        self.cells = cells;
        self
    }

    pub fn response_time_days(&self) -> f64 {
        self.response_time_days
    }

    pub fn complaint_type(&self) -> &str {
        &self.complaint_type
    }

    pub fn borough(&self) -> &str {
        &self.borough
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// An ordered collection of complaint records.
///
/// Datasets are built and filtered upstream and only read afterwards; none of
/// the views mutate them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<ComplaintRecord>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, records: Vec<ComplaintRecord>) -> Self {
        Self { columns, records }
    }

    pub fn from_records(records: impl IntoIterator<Item = ComplaintRecord>) -> Self {
        Self {
            columns: DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records: records.into_iter().collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[ComplaintRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComplaintRecord> {
        self.records.iter()
    }

    pub fn response_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(ComplaintRecord::response_time_days)
    }

    pub fn complaint_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(ComplaintRecord::complaint_type)
    }

    pub fn boroughs(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(ComplaintRecord::borough)
    }

    /// Returns a new dataset holding the records matching `predicate`, in order.
    pub fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&ComplaintRecord) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            records: self
                .records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ComplaintRecord;
    type IntoIter = std::slice::Iter<'a, ComplaintRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
