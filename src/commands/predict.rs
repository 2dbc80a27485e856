use crate::cli::{PredictArgs, PredictFormat};
use crate::config::Config;
use crate::core::data::{Bedtime, CoffeeIntake, PredictResponse, SleepAmount, WakeTime};
use crate::core::operations::BedtimePredictor;
use crate::utils::error::{report_error, AppError};
use crate::utils::OutputStyle;
use anyhow::Result;
use chrono::{Local, Timelike};

pub fn handle_predict_command(config: Config, args: &PredictArgs) -> Result<()> {
    let wake = match &args.wake {
        Some(input) => WakeTime::parse(input)?,
        None => WakeTime::parse(&config.general.default_wake)?,
    };
    let sleep = SleepAmount::new(args.sleep.unwrap_or(config.general.default_sleep))?;
    let coffee = CoffeeIntake::new(args.coffee.unwrap_or(config.general.default_coffee))?;
    let format = args.format.unwrap_or(PredictFormat::Text);

    let outcome = BedtimePredictor::from_config(&config)
        .and_then(|predictor| predictor.predict(wake, sleep, coffee));

    match outcome {
        Ok(bedtime) => print_bedtime(&config, wake, sleep, coffee, bedtime, format),
        Err(err @ AppError::ModelUnavailable(_)) => {
            // No retry: surface the message, fall back to the current time
            print_fallback(&config, &err, format)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_bedtime(
    config: &Config,
    wake: WakeTime,
    sleep: SleepAmount,
    coffee: CoffeeIntake,
    bedtime: Bedtime,
    format: PredictFormat,
) -> Result<()> {
    match format {
        PredictFormat::Json => {
            let response = PredictResponse::from_bedtime(bedtime);
            println!("{}", serde_json::to_string(&response)?);
        }
        PredictFormat::Text => {
            OutputStyle::print_header("Recommended Bedtime");
            OutputStyle::print_field_colored(
                "Wake up",
                &format!("{:02}:{:02}", wake.hour(), wake.minute()),
                OutputStyle::muted,
            );
            OutputStyle::print_field_colored(
                "Sleep",
                &format!("{} hours", sleep.hours()),
                OutputStyle::muted,
            );
            OutputStyle::print_field_colored(
                "Coffee",
                &format!("{} cups", coffee.cups()),
                OutputStyle::muted,
            );
            println!("{}", OutputStyle::separator());
            OutputStyle::print_field("Bedtime", &bedtime.format(config.general.clock));
        }
    }
    Ok(())
}

fn print_fallback(config: &Config, err: &AppError, format: PredictFormat) -> Result<()> {
    match format {
        PredictFormat::Json => {
            let response = PredictResponse::Error {
                error: "Sorry, there was a problem calculating your bedtime.".to_string(),
            };
            println!("{}", serde_json::to_string(&response)?);
        }
        PredictFormat::Text => {
            report_error(err);
            let now = Local::now().time();
            let fallback = Bedtime::from_seconds_offset(now.num_seconds_from_midnight() as f64);
            OutputStyle::print_field_colored(
                "Bedtime",
                &fallback.format(config.general.clock),
                OutputStyle::muted,
            );
        }
    }
    Ok(())
}
