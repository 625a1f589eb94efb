use super::employee::Employee;
use super::formatter::format_currency;
use super::messages::Message;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees_table(employees: &[Employee], currency_symbol: &str) -> Table {
        let mut table = Table::new();

        table.add_row(row![
            Message::ColumnId,
            Message::ColumnName,
            Message::ColumnDepartment,
            Message::ColumnSalary
        ]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.name,
                employee.department,
                r->format_currency(employee.salary, currency_symbol)
            ]);
        }

        table
    }

    pub fn employees(employees: &[Employee], currency_symbol: &str) {
        Self::employees_table(employees, currency_symbol).printstd();
    }

    /// Multi-line detail block for a single record.
    pub fn employee_details(employee: &Employee, currency_symbol: &str) -> String {
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}",
            Message::DetailId,
            employee.id,
            Message::DetailName,
            employee.name,
            Message::DetailDepartment,
            employee.department,
            Message::DetailSalary,
            format_currency(employee.salary, currency_symbol)
        )
    }
}
