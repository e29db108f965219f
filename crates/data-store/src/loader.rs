use crate::error::DataStoreError;
use crate::store::{DataStore, Tables};
use core_types::{
    Circuit, CircuitId, Constructor, ConstructorId, Driver, DriverId, Race, RaceId, RaceResult,
};
use polars::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::path::Path;

pub const RACES_FILE: &str = "races.csv";
pub const RESULTS_FILE: &str = "results.csv";
pub const DRIVERS_FILE: &str = "drivers.csv";
pub const CONSTRUCTORS_FILE: &str = "constructors.csv";
pub const CIRCUITS_FILE: &str = "circuits.csv";

/// Null marker used throughout the Ergast/Kaggle export.
const NULL_MARKER: &str = "\\N";

/// Reads the five source tables from `dir` and joins them into a store.
pub fn load_from_dir(dir: &Path) -> Result<DataStore, DataStoreError> {
    tracing::info!(directory = %dir.display(), "Loading race data.");
    let tables = load_tables(dir)?;
    DataStore::from_tables(tables)
}

/// Reads the five source tables from `dir` without joining them.
pub fn load_tables(dir: &Path) -> Result<Tables, DataStoreError> {
    Ok(Tables {
        circuits: read_circuits(&Table::read(dir, CIRCUITS_FILE, "circuits")?)?,
        races: read_races(&Table::read(dir, RACES_FILE, "races")?)?,
        drivers: read_drivers(&Table::read(dir, DRIVERS_FILE, "drivers")?)?,
        constructors: read_constructors(&Table::read(
            dir,
            CONSTRUCTORS_FILE,
            "constructors",
        )?)?,
        results: read_results(&Table::read(dir, RESULTS_FILE, "results")?)?,
    })
}

fn read_circuits(table: &Table) -> Result<Vec<Circuit>, DataStoreError> {
    let ids = table.required_ints("circuitId")?;
    let names = table.strings("name")?;
    let countries = table.strings("country")?;

    Ok(ids
        .into_iter()
        .zip(names)
        .zip(countries)
        .map(|((id, name), country)| Circuit {
            id: CircuitId(id),
            name,
            country,
            race_count: 0,
        })
        .collect())
}

fn read_races(table: &Table) -> Result<Vec<Race>, DataStoreError> {
    let ids = table.required_ints("raceId")?;
    let years = table.required_ints("year")?;
    let circuits = table.required_ints("circuitId")?;
    let names = table.strings("name")?;

    let mut races = Vec::with_capacity(ids.len());
    for (row, (((id, year), circuit), name)) in
        ids.into_iter().zip(years).zip(circuits).zip(names).enumerate()
    {
        let year = i32::try_from(year).map_err(|_| table.missing("year", row))?;
        races.push(Race {
            id: RaceId(id),
            year,
            circuit_id: CircuitId(circuit),
            name,
        });
    }
    Ok(races)
}

fn read_drivers(table: &Table) -> Result<Vec<Driver>, DataStoreError> {
    let ids = table.required_ints("driverId")?;
    let forenames = table.strings("forename")?;
    let surnames = table.strings("surname")?;
    let nationalities = table.strings("nationality")?;

    Ok(ids
        .into_iter()
        .zip(forenames)
        .zip(surnames)
        .zip(nationalities)
        .map(|(((id, forename), surname), nationality)| Driver {
            id: DriverId(id),
            name: format!("{forename} {surname}"),
            nationality,
        })
        .collect())
}

fn read_constructors(table: &Table) -> Result<Vec<Constructor>, DataStoreError> {
    let ids = table.required_ints("constructorId")?;
    let names = table.strings("name")?;
    let nationalities = table.strings("nationality")?;

    Ok(ids
        .into_iter()
        .zip(names)
        .zip(nationalities)
        .map(|((id, name), nationality)| Constructor {
            id: ConstructorId(id),
            name,
            nationality,
        })
        .collect())
}

fn read_results(table: &Table) -> Result<Vec<RaceResult>, DataStoreError> {
    let races = table.required_ints("raceId")?;
    let drivers = table.required_ints("driverId")?;
    let constructors = table.required_ints("constructorId")?;
    let grids = table.ints("grid")?;
    let positions = table.ints("position")?;
    let points = table.floats("points")?;

    let mut results = Vec::with_capacity(races.len());
    for row in 0..races.len() {
        // Unclassified finishers carry a null or non-numeric position.
        let position = positions[row].and_then(|p| u32::try_from(p).ok());
        let grid = grids[row].and_then(|g| u32::try_from(g).ok());
        let points = match points[row] {
            // Missing or unparsable points count as zero.
            None => Decimal::ZERO,
            Some(value) => Decimal::from_f64(value).ok_or_else(|| table.missing("points", row))?,
        };

        results.push(RaceResult {
            race_id: RaceId(races[row]),
            driver_id: DriverId(drivers[row]),
            constructor_id: ConstructorId(constructors[row]),
            position,
            grid,
            points,
        });
    }
    Ok(results)
}

/// A parsed CSV file plus the name used in error messages.
struct Table {
    name: &'static str,
    frame: DataFrame,
}

impl Table {
    fn read(dir: &Path, file: &str, name: &'static str) -> Result<Self, DataStoreError> {
        let path = dir.join(file);
        if !path.is_file() {
            return Err(DataStoreError::MissingFile(path));
        }

        // Read everything as text; half points can first appear deep into results.csv.
        let frame = CsvReader::from_path(&path)?
            .has_header(true)
            .infer_schema(Some(0))
            .with_null_values(Some(NullValues::AllColumnsSingle(NULL_MARKER.to_string())))
            .finish()?;

        tracing::debug!(table = name, rows = frame.height(), "Read source table.");
        Ok(Self { name, frame })
    }

    fn column(&self, column: &'static str) -> Result<&Series, DataStoreError> {
        self.frame
            .column(column)
            .map_err(|_| DataStoreError::MissingColumn {
                table: self.name,
                column,
            })
    }

    fn missing(&self, column: &'static str, row: usize) -> DataStoreError {
        DataStoreError::MissingValue {
            table: self.name,
            column,
            row,
        }
    }

    /// Integer column; unparsable cells become `None`.
    fn ints(&self, column: &'static str) -> Result<Vec<Option<i64>>, DataStoreError> {
        let series = self.column(column)?.cast(&DataType::Int64)?;
        Ok(series.i64()?.into_iter().collect())
    }

    /// Integer column that must be populated on every row.
    fn required_ints(&self, column: &'static str) -> Result<Vec<i64>, DataStoreError> {
        self.ints(column)?
            .into_iter()
            .enumerate()
            .map(|(row, value)| value.ok_or_else(|| self.missing(column, row)))
            .collect()
    }

    /// Float column; unparsable cells become `None`.
    fn floats(&self, column: &'static str) -> Result<Vec<Option<f64>>, DataStoreError> {
        let series = self.column(column)?.cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().collect())
    }

    /// Text column that must be populated on every row.
    fn strings(&self, column: &'static str) -> Result<Vec<String>, DataStoreError> {
        let series = self.column(column)?.cast(&DataType::String)?;
        series
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, value)| {
                value
                    .map(str::to_string)
                    .ok_or_else(|| self.missing(column, row))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::YearRange;
    use rust_decimal_macros::dec;
    use std::fs;

    const CIRCUITS: &str = "\
circuitId,circuitRef,name,location,country,lat,lng,alt,url
14,monza,Autodromo Nazionale di Monza,Monza,Italy,45.6156,9.28111,162,http://example.org/monza
9,silverstone,Silverstone Circuit,Silverstone,UK,52.0786,-1.01694,153,http://example.org/silverstone
";

    const RACES: &str = "\
raceId,year,round,circuitId,name,date
1053,2021,14,14,Italian Grand Prix,2021-09-12
1061,2021,10,9,British Grand Prix,2021-07-18
";

    const DRIVERS: &str = "\
driverId,driverRef,number,code,forename,surname,dob,nationality,url
1,hamilton,44,HAM,Lewis,Hamilton,1985-01-07,British,http://example.org/ham
830,max_verstappen,33,VER,Max,Verstappen,1997-09-30,Dutch,http://example.org/ver
817,ricciardo,3,RIC,Daniel,Ricciardo,1989-07-01,Australian,http://example.org/ric
";

    const CONSTRUCTORS: &str = "\
constructorId,constructorRef,name,nationality,url
131,mercedes,Mercedes,German,http://example.org/mercedes
9,red_bull,Red Bull,Austrian,http://example.org/red_bull
1,mclaren,McLaren,British,http://example.org/mclaren
";

    const RESULTS: &str = "\
resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points
1,1053,817,1,3,2,1,1,1,26
2,1053,1,131,44,4,\\N,R,19,0
3,1053,830,9,33,1,\\N,R,18,0
4,1061,1,131,44,2,1,1,1,25
5,1061,830,9,33,1,\\N,R,20,0
6,1061,817,1,3,11,4,4,4,12.5
";

    fn write_dataset(dir: &Path, results: &str) {
        fs::write(dir.join(CIRCUITS_FILE), CIRCUITS).unwrap();
        fs::write(dir.join(RACES_FILE), RACES).unwrap();
        fs::write(dir.join(DRIVERS_FILE), DRIVERS).unwrap();
        fs::write(dir.join(CONSTRUCTORS_FILE), CONSTRUCTORS).unwrap();
        fs::write(dir.join(RESULTS_FILE), results).unwrap();
    }

    #[test]
    fn test_load_from_dir_joins_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), RESULTS);

        let store = load_from_dir(dir.path()).unwrap();
        assert_eq!(store.rows().len(), 6);
        assert_eq!(store.year_bounds(), Some(YearRange::season(2021)));
        assert_eq!(store.driver_name(DriverId(830)), "Max Verstappen");
        assert_eq!(store.circuit(CircuitId(14)).unwrap().race_count, 1);

        let winners: Vec<_> = store
            .rows()
            .iter()
            .filter(|r| r.is_win())
            .map(|r| r.driver_id)
            .collect();
        assert_eq!(winners.len(), 2);

        let retired = store
            .rows()
            .iter()
            .find(|r| r.race_id == RaceId(1053) && r.driver_id == DriverId(1))
            .unwrap();
        assert_eq!(retired.position, None);
        assert_eq!(retired.grid, Some(4));

        let total: Decimal = store.rows().iter().map(|r| r.points).sum();
        assert_eq!(total, dec!(63.5));
    }

    #[test]
    fn test_fractional_points_after_many_whole_ones() {
        let dir = tempfile::tempdir().unwrap();
        let mut results =
            String::from("resultId,raceId,driverId,constructorId,grid,position,points\n");
        for id in 1..=150 {
            let points = if id == 140 { "4.5" } else { "10" };
            results.push_str(&format!("{id},1053,1,131,2,3,{points}\n"));
        }
        write_dataset(dir.path(), &results);

        let store = load_from_dir(dir.path()).unwrap();
        assert_eq!(store.rows().len(), 150);
        let total: Decimal = store.rows().iter().map(|r| r.points).sum();
        assert_eq!(total, dec!(1494.5));
    }

    #[test]
    fn test_unparsable_numbers_become_null() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "resultId,raceId,driverId,constructorId,grid,position,points\n1,1053,1,131,pit,abc,abc\n",
        );

        let store = load_from_dir(dir.path()).unwrap();
        let row = &store.rows()[0];
        assert_eq!(row.points, Decimal::ZERO);
        assert_eq!(row.position, None);
        assert_eq!(row.grid, None);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataStoreError::MissingFile(_)));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(dir.path(), "resultId,raceId,driverId\n1,1053,1\n");
        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            DataStoreError::MissingColumn { table: "results", column: "constructorId" }
        ));
    }

    #[test]
    fn test_dangling_reference_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "resultId,raceId,driverId,constructorId,grid,position,points\n1,1053,4242,1,1,1,25\n",
        );
        let err = load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, DataStoreError::UnknownDriver { .. }));
    }
}
