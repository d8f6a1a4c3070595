//! Interactive menu, the default mode when no command is given.

use anyhow::Result;
use dialoguer::{Input, Select};
use is_terminal::IsTerminal;

use dental::presentation::output::{appointment_line, dentist_line, patient_line};
use dental::ConcreteClinicService;

const ACTIONS: [&str; 8] = [
    "[1] Register Patient",
    "[2] Add Dentist",
    "[3] Schedule Appointment",
    "[4] View Appointments",
    "[5] Cancel Appointment",
    "[6] View Patients",
    "[7] View Dentists",
    "[0] Exit",
];

pub fn cmd_menu(service: &ConcreteClinicService) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `dental schedule --help` or `dental --help`");
        return Ok(());
    }

    loop {
        let selection = match Select::new()
            .with_prompt("What would you like to do?")
            .items(&ACTIONS)
            .default(0)
            .interact()
        {
            Ok(selection) => selection,
            // EOF or interrupt ends the session like picking Exit.
            Err(_) => return Ok(()),
        };

        if selection == ACTIONS.len() - 1 {
            return Ok(());
        }

        if let Err(error) = run_action(service, selection) {
            println!("Error: {error}");
        }
    }
}

fn run_action(service: &ConcreteClinicService, selection: usize) -> Result<()> {
    match selection {
        0 => register_patient(service),
        1 => add_dentist(service),
        2 => schedule_appointment(service),
        3 => view_appointments(service),
        4 => cancel_appointment(service),
        5 => view_patients(service),
        6 => view_dentists(service),
        _ => Ok(()),
    }
}

fn register_patient(service: &ConcreteClinicService) -> Result<()> {
    let name: String = Input::new().with_prompt("Patient name").interact_text()?;
    let phone: String = Input::new().with_prompt("Phone number").interact_text()?;

    let patient = service.register_patient(&name, &phone)?;
    println!("Patient ID: {}", patient.id());
    Ok(())
}

fn add_dentist(service: &ConcreteClinicService) -> Result<()> {
    let name: String = Input::new().with_prompt("Dentist name").interact_text()?;
    let specialty: String = Input::new().with_prompt("Specialty").interact_text()?;

    let dentist = service.add_dentist(&name, &specialty)?;
    println!("Dentist ID: {}", dentist.id());
    Ok(())
}

fn schedule_appointment(service: &ConcreteClinicService) -> Result<()> {
    let patient: String = Input::new().with_prompt("Patient ID").interact_text()?;
    let dentist: String = Input::new().with_prompt("Dentist ID").interact_text()?;
    let start: String = Input::new()
        .with_prompt("Start time (YYYY-MM-DD HH:MM)")
        .interact_text()?;
    let end: String = Input::new()
        .with_prompt("End time (YYYY-MM-DD HH:MM)")
        .interact_text()?;
    let notes: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()?;

    let start = super::parse_time(&start)?;
    let end = super::parse_time(&end)?;
    let notes = (!notes.is_empty()).then_some(notes.as_str());

    let appointment = service.schedule_appointment(&patient, &dentist, start, end, notes)?;
    println!("Appointment ID: {}", appointment.id());
    Ok(())
}

fn view_appointments(service: &ConcreteClinicService) -> Result<()> {
    for appointment in service.list_appointments()? {
        println!("{}", appointment_line(&appointment));
    }
    Ok(())
}

fn cancel_appointment(service: &ConcreteClinicService) -> Result<()> {
    let id: String = Input::new().with_prompt("Appointment ID").interact_text()?;

    service.cancel_appointment(&id)?;
    println!("Cancelled");
    Ok(())
}

fn view_patients(service: &ConcreteClinicService) -> Result<()> {
    for patient in service.list_patients()? {
        println!("{}", patient_line(&patient));
    }
    Ok(())
}

fn view_dentists(service: &ConcreteClinicService) -> Result<()> {
    for dentist in service.list_dentists()? {
        println!("{}", dentist_line(&dentist));
    }
    Ok(())
}
