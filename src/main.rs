//! `emprec` - CLI for the employee record store
//!
//! Every command opens the data file, performs one operation and exits.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveTime};
use clap::Parser;

use employee_records::cli::{
    AddCommand, AttendCommand, AttendanceCommand, Cli, Command, ListCommand, RaiseCommand,
    UpdateCommand, VacationCommand,
};
use employee_records::config::AttendanceConfig;
use employee_records::models::Employee;
use employee_records::store::{AttendanceUpsert, validate_attendance_times};
use employee_records::{
    ConfigLoader, LoadOutcome, RecordStore, SearchFilter, StoreError, init_logging,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let loader = ConfigLoader::load_or_default(cli.config.as_ref())?;
    let mut store_config = loader.store().clone();
    if let Some(data_file) = cli.data_file {
        store_config.data_file = data_file;
    }

    let mut store = RecordStore::from_config(&store_config)?;
    if let LoadOutcome::Unreadable { reason } = store.load_outcome() {
        eprintln!(
            "warning: ignoring unreadable data file {}: {reason}",
            store.path().display()
        );
    }

    match cli.command {
        Command::List(cmd) => handle_list(&store, &cmd),
        Command::Show(cmd) => {
            let employee = store
                .find_by_id(cmd.id)
                .ok_or(StoreError::NotFound { id: cmd.id })?;
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(employee)?);
            } else {
                print_employee(employee);
            }
            Ok(())
        }
        Command::NextId => {
            println!("{}", store.next_id());
            Ok(())
        }
        Command::Add(cmd) => handle_add(&mut store, cmd),
        Command::Update(cmd) => handle_update(&mut store, &cmd),
        Command::Delete { id } => {
            let removed = store.delete(id)?;
            println!("Deleted {removed}");
            Ok(())
        }
        Command::Raise(cmd) => handle_raise(&mut store, &cmd),
        Command::RaiseAll(cmd) => {
            let count = store.apply_raise_to_all(cmd.percentage)?;
            println!("Applied {}% to {count} employees", cmd.percentage);
            Ok(())
        }
        Command::Vacation(cmd) => handle_vacation(&mut store, cmd),
        Command::Attend(cmd) => handle_attend(&mut store, loader.attendance(), cmd),
        Command::Attendance(cmd) => handle_attendance(&store, &cmd),
        Command::Stats(cmd) => {
            let stats = store.statistics()?;
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }
            println!("Employees:          {}", stats.total_employees);
            println!("Active:             {}", stats.active_employees);
            println!("Average salary:     {}", stats.average_salary);
            println!("Average age:        {}", stats.average_age);
            println!("Average service:    {} years", stats.average_years_of_service);
            println!("Highest salary:     {}", stats.highest_salary);
            println!("Lowest salary:      {}", stats.lowest_salary);
            println!("Departments:");
            for (department, count) in &stats.department_counts {
                let payroll = stats
                    .department_payroll
                    .get(department)
                    .copied()
                    .unwrap_or_default();
                println!("  {department:<20} {count:>4}  {payroll:>14}");
            }
            Ok(())
        }
        Command::Payroll => {
            println!("Annual payroll:  {}", store.total_annual_payroll()?);
            println!("Monthly payroll: {}", store.total_monthly_payroll()?);
            Ok(())
        }
        Command::Export(cmd) => {
            store.export_csv_to(&cmd.path)?;
            println!(
                "Exported {} employees to {}",
                store.total_employees(),
                cmd.path.display()
            );
            Ok(())
        }
    }
}

fn handle_list(store: &RecordStore, cmd: &ListCommand) -> CliResult {
    let mut filter = SearchFilter::from_parts(
        cmd.name.as_deref(),
        cmd.department.as_deref(),
        cmd.position.as_deref(),
    );
    if let Some(status) = cmd.status {
        filter = filter.status(status);
    }
    let employees = store.search(&filter);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
        return Ok(());
    }
    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }
    println!(
        "{:>5}  {:<24} {:<16} {:<20} {:>12}  Status",
        "ID", "Name", "Department", "Position", "Salary"
    );
    for e in employees {
        println!(
            "{:>5}  {:<24} {:<16} {:<20} {:>12}  {}",
            e.id, e.name, e.department, e.position, e.salary, e.status
        );
    }
    Ok(())
}

fn handle_add(store: &mut RecordStore, cmd: AddCommand) -> CliResult {
    let employee = Employee {
        id: cmd.id.unwrap_or_else(|| store.next_id()),
        name: cmd.name,
        age: cmd.age,
        department: cmd.department,
        position: cmd.position,
        email: cmd.email,
        phone: cmd.phone,
        salary: cmd.salary,
        join_date: cmd.join_date.unwrap_or_else(|| Local::now().date_naive()),
        vacation_days: cmd.vacation_days,
        status: cmd.status,
        attendance: Vec::new(),
    };
    let summary = employee.to_string();
    store.add(employee)?;
    println!("Added {summary}");
    Ok(())
}

fn handle_update(store: &mut RecordStore, cmd: &UpdateCommand) -> CliResult {
    let mut employee = store
        .find_by_id(cmd.id)
        .cloned()
        .ok_or(StoreError::NotFound { id: cmd.id })?;

    cmd.apply_to(&mut employee);

    let summary = employee.to_string();
    store.update(employee)?;
    println!("Updated {summary}");
    Ok(())
}

fn handle_raise(store: &mut RecordStore, cmd: &RaiseCommand) -> CliResult {
    let preview = store.preview_raise(cmd.id, cmd.percentage)?;
    println!(
        "{} -> {} ({:+})",
        preview.current, preview.raised, preview.difference
    );
    if !cmd.preview {
        store.apply_salary_raise(cmd.id, cmd.percentage)?;
        println!("Saved.");
    }
    Ok(())
}

fn handle_vacation(store: &mut RecordStore, cmd: VacationCommand) -> CliResult {
    let balance = match cmd {
        VacationCommand::Add { id, days } => store.add_vacation_days(id, days)?,
        VacationCommand::Deduct { id, days } => store.deduct_vacation_days(id, days)?,
    };
    println!("Vacation balance: {balance} days");
    Ok(())
}

fn handle_attend(
    store: &mut RecordStore,
    office: &AttendanceConfig,
    cmd: AttendCommand,
) -> CliResult {
    let date = cmd.date.unwrap_or_else(|| Local::now().date_naive());
    let (check_in, check_out) = cmd.resolved_times(office);
    validate_attendance_times(check_in, check_out)?;

    let upsert = store.mark_attendance(
        cmd.id,
        date,
        cmd.status,
        check_in,
        check_out,
        cmd.notes.as_deref(),
    )?;
    let verb = match upsert {
        AttendanceUpsert::Created => "Recorded",
        AttendanceUpsert::Updated => "Updated",
    };
    println!("{verb} {} for employee {} on {date}", cmd.status, cmd.id);
    Ok(())
}

fn handle_attendance(store: &RecordStore, cmd: &AttendanceCommand) -> CliResult {
    let today = Local::now().date_naive();
    let year = cmd.year.unwrap_or(today.year());
    let month = cmd.month.unwrap_or(today.month());

    let records = store.attendance_for_month(cmd.id, year, month)?;
    let summary = store.attendance_summary_for_month(cmd.id, year, month)?;

    if cmd.json {
        let report = serde_json::json!({
            "employee_id": cmd.id,
            "year": year,
            "month": month,
            "records": records,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Attendance for employee {} in {year}-{month:02}", cmd.id);
    for record in &records {
        println!(
            "  {}  {:<10} {} - {}  {}",
            record.date,
            record.status.to_string(),
            clock(record.check_in),
            clock(record.check_out),
            record.notes
        );
    }
    println!();
    println!(
        "Present {} | Absent {} | Leave {} | Late {} | Early leave {}",
        summary.present, summary.absent, summary.leave, summary.late, summary.early_leave
    );
    println!(
        "Attendance: {}% of {} working days",
        summary.attendance_percentage, summary.working_days
    );
    Ok(())
}

fn clock(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
}

fn print_employee(e: &Employee) {
    println!("ID:            {}", e.id);
    println!("Name:          {}", e.name);
    println!("Age:           {}", e.age);
    println!("Department:    {}", e.department);
    println!("Position:      {}", e.position);
    println!("Email:         {}", e.email);
    println!("Phone:         {}", e.phone);
    println!("Salary:        {} (monthly {})", e.salary, e.monthly_salary());
    println!("Joined:        {} ({} years)", e.join_date, e.years_of_service());
    println!("Vacation days: {}", e.vacation_days);
    println!("Status:        {}", e.status);
    println!("Attendance:    {} records", e.attendance.len());
}
