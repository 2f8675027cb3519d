//! Fixture rows seeded into each worksheet the first time it is read.
//!
//! Passwords are hashed at seed time, so stored rows never hold a
//! plaintext credential.

use oficina_core::models::admin::Admin;
use oficina_core::models::appointment::Appointment;
use oficina_core::models::client::Client;
use oficina_core::models::employee::Employee;
use oficina_core::models::quote::Quote;
use oficina_core::models::service_order::ServiceOrder;
use oficina_core::models::stock::StockItem;
use oficina_core::models::vehicle::Vehicle;

use crate::error::DbError;
use crate::password::hash_password;
use crate::sheet::{Row, Sheet, TableRecord};

/// Every worksheet the console knows about.
pub const TABLES: &[&str] = &[
    Client::TABLE,
    Vehicle::TABLE,
    Employee::TABLE,
    Admin::TABLE,
    ServiceOrder::TABLE,
    StockItem::TABLE,
    Quote::TABLE,
    Appointment::TABLE,
];

/// Header row of a known worksheet.
pub fn header(table: &str) -> Option<&'static [&'static str]> {
    let header = match table {
        Client::TABLE => Client::HEADER,
        Vehicle::TABLE => Vehicle::HEADER,
        Employee::TABLE => Employee::HEADER,
        Admin::TABLE => Admin::HEADER,
        ServiceOrder::TABLE => ServiceOrder::HEADER,
        StockItem::TABLE => StockItem::HEADER,
        Quote::TABLE => Quote::HEADER,
        Appointment::TABLE => Appointment::HEADER,
        _ => return None,
    };
    Some(header)
}

fn row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Default contents of `table`, or `None` for a table with no
/// fixtures.
pub fn default_sheet(table: &str, pepper: Option<&str>) -> Result<Option<Sheet>, DbError> {
    let Some(header) = header(table) else {
        return Ok(None);
    };

    let rows = match table {
        Client::TABLE => vec![
            row(&[
                "1",
                "Maria Silva",
                "123.456.789-00",
                "maria.silva@email.com",
                "(11) 98765-4321",
                "Rua das Flores, 123 - São Paulo",
                "2024-01-15T10:00:00Z",
            ]),
            row(&[
                "2",
                "João Santos",
                "987.654.321-00",
                "joao.santos@email.com",
                "(11) 91234-5678",
                "Av. Paulista, 1000 - São Paulo",
                "2024-02-03T14:30:00Z",
            ]),
        ],
        Vehicle::TABLE => vec![
            row(&["1", "1", "ABC-1234", "Toyota", "Corolla", "2020", "Prata"]),
            row(&["2", "2", "XYZ-5678", "Honda", "Civic", "2019", "Preto"]),
        ],
        Employee::TABLE => vec![
            employee_row(
                "1",
                "Carlos Oliveira",
                "carlos",
                "func123",
                "Mecânico",
                true,
                pepper,
            )?,
            employee_row(
                "2",
                "Ana Souza",
                "ana",
                "ana123",
                "Recepcionista",
                true,
                pepper,
            )?,
            employee_row(
                "3",
                "Pedro Lima",
                "pedro",
                "pedro123",
                "Mecânico",
                false,
                pepper,
            )?,
        ],
        Admin::TABLE => vec![vec![
            "1".to_string(),
            "Administrador".to_string(),
            "admin".to_string(),
            hash_password("admin123", pepper)?,
            "admin@oficina.com".to_string(),
            "2024-01-01T08:00:00Z".to_string(),
        ]],
        ServiceOrder::TABLE => vec![
            row(&[
                "1",
                "1",
                "1",
                "Troca de óleo e filtro",
                "in_progress",
                "15000",
                "2024-03-10T09:00:00Z",
            ]),
            row(&[
                "2",
                "2",
                "2",
                "Revisão dos freios",
                "pending",
                "42000",
                "2024-03-12T11:00:00Z",
            ]),
        ],
        StockItem::TABLE => vec![
            row(&["1", "Óleo 5W30 (1L)", "20", "10", "4500"]),
            row(&["2", "Filtro de ar", "4", "5", "3500"]),
            row(&["3", "Pastilha de freio", "12", "6", "12000"]),
        ],
        Quote::TABLE => vec![row(&[
            "1",
            "2",
            "2",
            "Substituição de pastilhas e discos",
            "68000",
            "pending",
            "2024-03-11T16:00:00Z",
        ])],
        Appointment::TABLE => vec![row(&[
            "1",
            "1",
            "1",
            "2024-03-20T13:00:00Z",
            "Alinhamento e balanceamento",
            "scheduled",
        ])],
        _ => Vec::new(),
    };

    Ok(Some(Sheet::new(header, rows)))
}

fn employee_row(
    id: &str,
    name: &str,
    username: &str,
    password: &str,
    position: &str,
    active: bool,
    pepper: Option<&str>,
) -> Result<Row, DbError> {
    Ok(vec![
        id.to_string(),
        name.to_string(),
        username.to_string(),
        hash_password(password, pepper)?,
        position.to_string(),
        format!("{username}@oficina.com"),
        String::new(),
        active.to_string(),
        "2024-01-10T08:00:00Z".to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_row_maps_to_its_record() {
        fn check<R: TableRecord>() {
            let sheet = default_sheet(R::TABLE, None).unwrap().unwrap();
            assert_eq!(sheet.header.len(), R::HEADER.len());
            assert!(!sheet.rows.is_empty(), "{} has no fixtures", R::TABLE);
            for (i, row) in sheet.rows.iter().enumerate() {
                if let Err(reason) = R::from_row(row) {
                    panic!("{} row {i}: {reason}", R::TABLE);
                }
            }
        }

        check::<Client>();
        check::<Vehicle>();
        check::<Employee>();
        check::<Admin>();
        check::<ServiceOrder>();
        check::<StockItem>();
        check::<Quote>();
        check::<Appointment>();
    }

    #[test]
    fn every_known_table_has_header_and_fixtures() {
        assert_eq!(TABLES.len(), 8);
        for table in TABLES {
            let header = header(table).unwrap_or_else(|| panic!("{table} has no header"));
            let sheet = default_sheet(table, None).unwrap().unwrap();
            assert_eq!(sheet.header, header.to_vec(), "{table}");
            assert!(!sheet.rows.is_empty(), "{table} has no fixtures");
        }
    }

    #[test]
    fn unknown_table_has_no_fixtures() {
        assert!(default_sheet("Rascunhos", None).unwrap().is_none());
        assert!(header("Rascunhos").is_none());
    }
}
