use crate::config::Config;
use crate::model::SleepModel;
use crate::utils::OutputStyle;
use anyhow::Result;

pub fn handle_model_command(config: Config) -> Result<()> {
    let model = SleepModel::from_config(&config)?;

    let source = match &config.model.path {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    };

    OutputStyle::print_header("Regression Model");
    OutputStyle::print_field_colored("Name", &model.name, OutputStyle::value);
    OutputStyle::print_field_colored("Source", &source, OutputStyle::muted);
    OutputStyle::print_field_colored("Schema", &model.schema.to_string(), OutputStyle::muted);
    println!("{}", OutputStyle::separator());
    OutputStyle::print_field_colored(
        "Intercept",
        &model.intercept.to_string(),
        OutputStyle::info,
    );
    OutputStyle::print_field_colored(
        "Wake",
        &model.coefficients.wake.to_string(),
        OutputStyle::info,
    );
    OutputStyle::print_field_colored(
        "Sleep",
        &model.coefficients.estimated_sleep.to_string(),
        OutputStyle::info,
    );
    OutputStyle::print_field_colored(
        "Coffee",
        &model.coefficients.coffee.to_string(),
        OutputStyle::info,
    );

    Ok(())
}
