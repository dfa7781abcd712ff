//! Output formatting module

use rental_domain::model::{Car, Reservation};
use rental_domain::service::RentalReport;
use rental_types::{OutputFormat, Result};
use serde_json::json;

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_cars(output_format: OutputFormat, cars: &[Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&cars);
    }

    if cars.is_empty() {
        println!("No cars found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<28} {:<12} {:>12}",
        "Plate", "Car", "Category", "Daily rate"
    );
    println!("{}", "-".repeat(67));
    for car in cars {
        println!(
            "{:<12} {:<28} {:<12} {:>12.2}",
            car.plate,
            truncate(&car.make_model, 28),
            truncate(&car.category, 12),
            car.daily_rate
        );
    }
    println!();
    println!("{} car(s)", cars.len());

    Ok(())
}

pub fn output_availability(output_format: OutputFormat, plate: &str, available: bool) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "plate": plate, "available": available }));
    }

    if available {
        println!("{} is available for the selected dates", plate);
    } else {
        println!("{} is not available for the selected dates", plate);
    }
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, plate: &str, price: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "plate": plate, "price": price }));
    }

    println!("Price for {}: {:.2}", plate, price);
    Ok(())
}

pub fn output_rate(output_format: OutputFormat, plate: &str, rate: f64) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "plate": plate, "dailyRate": rate }));
    }

    println!("Daily rate for {}: {:.2}", plate, rate);
    Ok(())
}

pub fn output_booking(output_format: OutputFormat, reservation: &Reservation) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "message": "Reservation created",
            "price": reservation.total_charge,
            "reservation": reservation,
        }));
    }

    println!("Reservation created");
    println!("  Customer: {}", reservation.customer_name);
    println!("  Plate:    {}", reservation.plate);
    println!("  From:     {}", reservation.start_date.format("%Y-%m-%d %H:%M"));
    println!("  To:       {}", reservation.end_date.format("%Y-%m-%d %H:%M"));
    println!("  Price:    {:.2}", reservation.total_charge);
    Ok(())
}

pub fn output_cancellation(
    output_format: OutputFormat,
    plate: &str,
    removed: Option<&Reservation>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "plate": plate, "cancelled": removed }));
    }

    match removed {
        Some(r) => println!(
            "Cancelled reservation of {} for {} ({} - {})",
            r.plate,
            r.customer_name,
            r.start_date.format("%Y-%m-%d"),
            r.end_date.format("%Y-%m-%d")
        ),
        None => println!("No reservation found for {}", plate),
    }
    Ok(())
}

pub fn output_reservations(output_format: OutputFormat, reservations: &[Reservation]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&reservations);
    }

    if reservations.is_empty() {
        println!("No reservations found.");
        return Ok(());
    }

    println!(
        "{:<24} {:<12} {:<16} {:<16} {:>10}",
        "Customer", "Plate", "From", "To", "Charge"
    );
    println!("{}", "-".repeat(82));
    for r in reservations {
        println!(
            "{:<24} {:<12} {:<16} {:<16} {:>10.2}",
            truncate(&r.customer_name, 24),
            r.plate,
            r.start_date.format("%Y-%m-%d %H:%M"),
            r.end_date.format("%Y-%m-%d %H:%M"),
            r.total_charge
        );
    }
    println!();
    println!("{} reservation(s)", reservations.len());

    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &RentalReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nRental Report");
    println!("=============");
    println!("Total income:    {:.2}", report.total_income);
    println!("Most rented car: {}", report.top_car);
    println!("Total bookings:  {}", report.total_bookings);
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        s.to_string()
    }
}
