use crate::lc_data::{Error, FluxLightCurveRecord, LightCurves};

use itertools::process_results;
use light_curve_microlensing::ndarray::Array2;
use std::io::Read;

/// Parse `time,flux,fluxerr,telescope` CSV, telescopes keep the order of their first row
pub fn light_curves_from_csv<R: Read>(reader: R) -> Result<LightCurves, Error> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let rows = csv_reader
        .deserialize()
        .map(|record: Result<FluxLightCurveRecord, _>| record.map(|r| r.into_row()));
    let grouped = process_results(rows, |rows| {
        let mut grouped: Vec<(String, Vec<[f64; 3]>)> = vec![];
        for (telescope, row) in rows {
            match grouped.iter_mut().find(|(name, _)| *name == telescope) {
                Some((_, telescope_rows)) => telescope_rows.push(row),
                None => grouped.push((telescope, vec![row])),
            }
        }
        grouped
    })?;
    Ok(grouped
        .into_iter()
        .map(|(name, rows)| (name, Array2::from(rows)))
        .collect())
}
