//! Export of reach points for plotting tools.

use crate::summary::ReachPoint;
use std::io::Write;

/// Write `points` as CSV with an `x,y,z,weight` header.
pub fn write_points_csv<W: Write>(
    points: impl IntoIterator<Item = ReachPoint>,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "x,y,z,weight")?;
    for p in points {
        writeln!(writer, "{},{},{},{}", p.x, p.y, p.z, p.weight)?;
    }
    writer.flush()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn csv_rows() {
        let points = [
            ReachPoint { x: -5, y: 0, z: 10, weight: 0.0 },
            ReachPoint { x: 0, y: 5, z: 30, weight: 1.5 },
        ];
        let mut out = Vec::new();
        write_points_csv(points, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "x,y,z,weight\n-5,0,10,0\n0,5,30,1.5\n"
        );
    }
}
