//! [`TableRecord`] mappings for every worksheet of the shop.

use oficina_core::models::admin::Admin;
use oficina_core::models::appointment::{Appointment, AppointmentStatus};
use oficina_core::models::client::Client;
use oficina_core::models::employee::Employee;
use oficina_core::models::quote::{Quote, QuoteStatus};
use oficina_core::models::service_order::{ServiceOrder, ServiceStatus};
use oficina_core::models::stock::StockItem;
use oficina_core::models::vehicle::Vehicle;

use crate::sheet::{Cells, Row, TableRecord, datetime_cell, opt_cell};

/// Column index of the CPF in `Clientes`.
pub const CLIENT_CPF_COLUMN: usize = 2;

impl TableRecord for Client {
    const TABLE: &'static str = "Clientes";
    const HEADER: &'static [&'static str] = &[
        "id",
        "name",
        "cpf",
        "email",
        "phone",
        "address",
        "created_at",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Client {
            id: c.required(0, "id")?,
            name: c.required(1, "name")?,
            cpf: c.required(CLIENT_CPF_COLUMN, "cpf")?,
            email: c.optional(3),
            phone: c.optional(4),
            address: c.optional(5),
            created_at: c.datetime(6, "created_at")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.cpf.clone(),
            opt_cell(&self.email),
            opt_cell(&self.phone),
            opt_cell(&self.address),
            datetime_cell(&self.created_at),
        ]
    }
}

impl TableRecord for Vehicle {
    const TABLE: &'static str = "Veiculos";
    const HEADER: &'static [&'static str] =
        &["id", "client_id", "plate", "brand", "model", "year", "color"];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Vehicle {
            id: c.required(0, "id")?,
            client_id: c.required(1, "client_id")?,
            plate: c.required(2, "plate")?,
            brand: c.required(3, "brand")?,
            model: c.required(4, "model")?,
            year: c.parse(5, "year")?,
            color: c.optional(6),
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.plate.clone(),
            self.brand.clone(),
            self.model.clone(),
            self.year.to_string(),
            opt_cell(&self.color),
        ]
    }
}

impl TableRecord for Employee {
    const TABLE: &'static str = "Funcionarios";
    const HEADER: &'static [&'static str] = &[
        "id",
        "name",
        "username",
        "password_hash",
        "position",
        "email",
        "phone",
        "active",
        "created_at",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Employee {
            id: c.required(0, "id")?,
            name: c.required(1, "name")?,
            username: c.required(2, "username")?,
            password_hash: c.required(3, "password_hash")?,
            position: c.text(4, "position")?.trim().to_string(),
            email: c.optional(5),
            phone: c.optional(6),
            active: c.flag(7, "active")?,
            created_at: c.datetime(8, "created_at")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.username.clone(),
            self.password_hash.clone(),
            self.position.clone(),
            opt_cell(&self.email),
            opt_cell(&self.phone),
            self.active.to_string(),
            datetime_cell(&self.created_at),
        ]
    }
}

impl TableRecord for Admin {
    const TABLE: &'static str = "Admin";
    const HEADER: &'static [&'static str] = &[
        "id",
        "name",
        "username",
        "password_hash",
        "email",
        "created_at",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Admin {
            id: c.required(0, "id")?,
            name: c.required(1, "name")?,
            username: c.required(2, "username")?,
            password_hash: c.required(3, "password_hash")?,
            email: c.optional(4),
            created_at: c.datetime(5, "created_at")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.username.clone(),
            self.password_hash.clone(),
            opt_cell(&self.email),
            datetime_cell(&self.created_at),
        ]
    }
}

fn parse_service_status(s: &str) -> Result<ServiceStatus, String> {
    match s {
        "pending" => Ok(ServiceStatus::Pending),
        "in_progress" => Ok(ServiceStatus::InProgress),
        "completed" => Ok(ServiceStatus::Completed),
        "cancelled" => Ok(ServiceStatus::Cancelled),
        other => Err(format!("unknown service status: {other}")),
    }
}

fn service_status_to_str(s: ServiceStatus) -> &'static str {
    match s {
        ServiceStatus::Pending => "pending",
        ServiceStatus::InProgress => "in_progress",
        ServiceStatus::Completed => "completed",
        ServiceStatus::Cancelled => "cancelled",
    }
}

impl TableRecord for ServiceOrder {
    const TABLE: &'static str = "Servicos";
    const HEADER: &'static [&'static str] = &[
        "id",
        "client_id",
        "vehicle_id",
        "description",
        "status",
        "value_cents",
        "opened_at",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(ServiceOrder {
            id: c.required(0, "id")?,
            client_id: c.required(1, "client_id")?,
            vehicle_id: c.required(2, "vehicle_id")?,
            description: c.text(3, "description")?.to_string(),
            status: parse_service_status(c.text(4, "status")?.trim())?,
            value_cents: c.parse(5, "value_cents")?,
            opened_at: c.datetime(6, "opened_at")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.vehicle_id.clone(),
            self.description.clone(),
            service_status_to_str(self.status).to_string(),
            self.value_cents.to_string(),
            datetime_cell(&self.opened_at),
        ]
    }
}

impl TableRecord for StockItem {
    const TABLE: &'static str = "Estoque";
    const HEADER: &'static [&'static str] = &[
        "id",
        "name",
        "quantity",
        "min_quantity",
        "unit_price_cents",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(StockItem {
            id: c.required(0, "id")?,
            name: c.required(1, "name")?,
            quantity: c.parse(2, "quantity")?,
            min_quantity: c.parse(3, "min_quantity")?,
            unit_price_cents: c.parse(4, "unit_price_cents")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.quantity.to_string(),
            self.min_quantity.to_string(),
            self.unit_price_cents.to_string(),
        ]
    }
}

fn parse_quote_status(s: &str) -> Result<QuoteStatus, String> {
    match s {
        "pending" => Ok(QuoteStatus::Pending),
        "approved" => Ok(QuoteStatus::Approved),
        "rejected" => Ok(QuoteStatus::Rejected),
        other => Err(format!("unknown quote status: {other}")),
    }
}

fn quote_status_to_str(s: QuoteStatus) -> &'static str {
    match s {
        QuoteStatus::Pending => "pending",
        QuoteStatus::Approved => "approved",
        QuoteStatus::Rejected => "rejected",
    }
}

impl TableRecord for Quote {
    const TABLE: &'static str = "Orcamentos";
    const HEADER: &'static [&'static str] = &[
        "id",
        "client_id",
        "vehicle_id",
        "description",
        "total_cents",
        "status",
        "created_at",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Quote {
            id: c.required(0, "id")?,
            client_id: c.required(1, "client_id")?,
            vehicle_id: c.required(2, "vehicle_id")?,
            description: c.text(3, "description")?.to_string(),
            total_cents: c.parse(4, "total_cents")?,
            status: parse_quote_status(c.text(5, "status")?.trim())?,
            created_at: c.datetime(6, "created_at")?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.vehicle_id.clone(),
            self.description.clone(),
            self.total_cents.to_string(),
            quote_status_to_str(self.status).to_string(),
            datetime_cell(&self.created_at),
        ]
    }
}

fn parse_appointment_status(s: &str) -> Result<AppointmentStatus, String> {
    match s {
        "scheduled" => Ok(AppointmentStatus::Scheduled),
        "confirmed" => Ok(AppointmentStatus::Confirmed),
        "done" => Ok(AppointmentStatus::Done),
        "cancelled" => Ok(AppointmentStatus::Cancelled),
        other => Err(format!("unknown appointment status: {other}")),
    }
}

fn appointment_status_to_str(s: AppointmentStatus) -> &'static str {
    match s {
        AppointmentStatus::Scheduled => "scheduled",
        AppointmentStatus::Confirmed => "confirmed",
        AppointmentStatus::Done => "done",
        AppointmentStatus::Cancelled => "cancelled",
    }
}

impl TableRecord for Appointment {
    const TABLE: &'static str = "Agendamentos";
    const HEADER: &'static [&'static str] = &[
        "id",
        "client_id",
        "vehicle_id",
        "scheduled_for",
        "service",
        "status",
    ];

    fn from_row(row: &[String]) -> Result<Self, String> {
        let c = Cells::new(row);
        Ok(Appointment {
            id: c.required(0, "id")?,
            client_id: c.required(1, "client_id")?,
            vehicle_id: c.required(2, "vehicle_id")?,
            scheduled_for: c.datetime(3, "scheduled_for")?,
            service: c.text(4, "service")?.to_string(),
            status: parse_appointment_status(c.text(5, "status")?.trim())?,
        })
    }

    fn to_row(&self) -> Row {
        vec![
            self.id.clone(),
            self.client_id.clone(),
            self.vehicle_id.clone(),
            datetime_cell(&self.scheduled_for),
            self.service.clone(),
            appointment_status_to_str(self.status).to_string(),
        ]
    }
}
