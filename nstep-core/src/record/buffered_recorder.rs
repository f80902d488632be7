use super::{Record, Recorder};
use crate::error::Result;

/// Buffered recorder.
///
/// This is used for keeping per-episode statistics of a learning run in memory.
#[derive(Debug, Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.buf.iter()
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Collects the scalar stored under `key` in every record.
    pub fn scalars(&self, key: &str) -> Result<Vec<f64>> {
        self.buf.iter().map(|r| r.get_scalar(key)).collect()
    }
}

impl Recorder for BufferedRecorder {
    /// Write a [`Record`] to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordValue;

    #[test]
    fn test_scalars() -> Result<()> {
        let mut recorder = BufferedRecorder::new();
        for i in 0..3 {
            recorder.write(Record::from_scalar("episode", i as f64));
        }
        assert_eq!(recorder.scalars("episode")?, vec![0.0, 1.0, 2.0]);
        assert!(recorder.scalars("reward").is_err());

        recorder.write(Record::from_slice(&[("episode", RecordValue::Array1(vec![3.0]))]));
        assert!(recorder.scalars("episode").is_err());
        Ok(())
    }
}
