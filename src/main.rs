mod args;
mod config;
mod reader;
mod writer;

use bka::{input::InputOperation, models::User, services::AccountService, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let args = args::parse_input_args()?;
    log::debug!("Parsed input args: {args:?}");

    let holder = User::new(args.holder_ssn);
    let mut service = bka::build_account_service(holder, args.iban, args.opening_balance);

    process_data(&args.input_path, &mut service)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&service)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read operations file and apply every row to the account. Rejected rows are logged and skipped.
fn process_data(input_path: &std::path::Path, service: &mut AccountService) -> Result {
    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputOperation>() {
        log::debug!("Parsing record into InputOperation: {record:?}");
        let input_operation = match record {
            Ok(input_operation) => input_operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let operation = match input_operation.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = service.apply(&operation) {
            log::warn!("Rejected {operation:?}: {e}");
        }
    }

    Ok(())
}

/// Build report from the final account state, and write it to stdout
fn report_to_std_out(service: &AccountService) -> Result {
    let report = service.build_report();

    log::debug!("Serializing report: {report:?}");
    let output = writer::write_report(&report)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    Ok(())
}
