//! probcalc: command line front end of the probability calculators.
//!
//! ```text
//! probcalc binomial n=10 p=0.5 k=5
//! probcalc --chart json normal mu=0 sigma=1 x=1.96 mode=at-most
//! probcalc shell
//! ```

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use ProbabilityCalculators::{
    calculator::{Calculation, Calculator, CalculatorSession},
    chart::{ChartFormat, TerminalChart, TerminalChartRenderer},
    distributions::{
        Binomial::BinomialCalculator, Exponential::ExponentialCalculator,
        Hypergeometric::HypergeometricCalculator, Normal::NormalCalculator,
        Poisson::PoissonCalculator,
    },
    errors::CalcError,
    input::FormFields,
    render,
};

#[derive(Parser)]
#[command(name = "probcalc")]
#[command(about = "Binomial, Poisson, exponential, normal and hypergeometric probability calculators")]
#[command(version)]
struct Cli {
    /// How to draw the distribution chart
    #[arg(long, value_enum, default_value_t = ChartOption::Text, global = true)]
    chart: ChartOption,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Submit(Submit),

    /// Read one calculation per line from stdin, e.g. `poisson lambda=3 k=0`
    Shell,
}

/// One calculation. Fields are given as `name=value`.
#[derive(Subcommand, Debug)]
enum Submit {
    /// Successes in n trials. Fields: n, p, k, mode, upper
    Binomial {
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },
    /// Events at a given rate. Fields: lambda, k, mode, upper
    Poisson {
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },
    /// Waiting times. Fields: lambda, x, mode, upper
    Exponential {
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },
    /// Normally distributed values. Fields: mu, sigma, x, mode, upper
    Normal {
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },
    /// Draws without replacement. Fields: N, K, n, k, mode, upper
    Hypergeometric {
        #[arg(allow_hyphen_values = true)]
        fields: Vec<String>,
    },
}

/// A single line of the interactive shell.
#[derive(Parser)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    submit: Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartOption {
    None,
    Text,
    Json,
}

impl Submit {
    fn fields(&self) -> &[String] {
        match self {
            Submit::Binomial { fields }
            | Submit::Poisson { fields }
            | Submit::Exponential { fields }
            | Submit::Normal { fields }
            | Submit::Hypergeometric { fields } => fields,
        }
    }
}

type Session<C> = CalculatorSession<C, TerminalChartRenderer>;

/// One session per distribution, so each keeps (and replaces) its own chart.
struct Workbench {
    binomial: Session<BinomialCalculator>,
    poisson: Session<PoissonCalculator>,
    exponential: Session<ExponentialCalculator>,
    normal: Session<NormalCalculator>,
    hypergeometric: Session<HypergeometricCalculator>,
}

/// What gets printed after a successful calculation.
struct Report {
    panel: String,
    chart: Option<String>,
}

impl Workbench {
    fn new(chart: ChartOption) -> Workbench {
        let format: ChartFormat = match chart {
            ChartOption::Json => ChartFormat::Json,
            ChartOption::Text | ChartOption::None => ChartFormat::Text,
        };
        let enabled: bool = chart != ChartOption::None;

        return Workbench {
            binomial: session(BinomialCalculator, format, enabled),
            poisson: session(PoissonCalculator, format, enabled),
            exponential: session(ExponentialCalculator, format, enabled),
            normal: session(NormalCalculator, format, enabled),
            hypergeometric: session(HypergeometricCalculator, format, enabled),
        };
    }

    fn submit(&mut self, submit: &Submit) -> Result<Report, CalcError> {
        let fields: FormFields = FormFields::parse_assignments(submit.fields())?;

        return match submit {
            Submit::Binomial { .. } => report(&mut self.binomial, &fields),
            Submit::Poisson { .. } => report(&mut self.poisson, &fields),
            Submit::Exponential { .. } => report(&mut self.exponential, &fields),
            Submit::Normal { .. } => report(&mut self.normal, &fields),
            Submit::Hypergeometric { .. } => report(&mut self.hypergeometric, &fields),
        };
    }
}

fn session<C: Calculator>(calculator: C, format: ChartFormat, enabled: bool) -> Session<C> {
    return CalculatorSession::new(calculator, TerminalChartRenderer::new(format)).with_charts(enabled);
}

fn report<C: Calculator>(session: &mut Session<C>, fields: &FormFields) -> Result<Report, CalcError> {
    let calculation: Calculation = session.submit(fields)?;
    let chart: Option<String> = session
        .active_chart()
        .map(|chart: &TerminalChart| chart.body().to_string());

    return Ok(Report {
        panel: render::results_panel(&calculation),
        chart,
    });
}

fn print_result(result: &Result<Report, CalcError>) {
    match result {
        Ok(report) => {
            println!("{}", report.panel);
            if let Some(chart) = &report.chart {
                println!();
                println!("{chart}");
            }
        }
        Err(error) => println!("{}", render::error_panel(error)),
    }
}

fn run_shell(workbench: &mut Workbench) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line: String = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            None => continue,
            Some(&"quit") | Some(&"exit") => break,
            Some(_) => {}
        }

        match ShellLine::try_parse_from(&tokens) {
            Ok(parsed) => {
                print_result(&workbench.submit(&parsed.submit));
                println!();
            }
            Err(error) => println!("{}", error.render()),
        }
    }

    return Ok(());
}

fn main() -> anyhow::Result<ExitCode> {
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut workbench: Workbench = Workbench::new(cli.chart);

    match &cli.command {
        Commands::Submit(submit) => {
            let result: Result<Report, CalcError> = workbench.submit(submit);
            print_result(&result);
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Shell => run_shell(&mut workbench)?,
    }

    return Ok(ExitCode::SUCCESS);
}
