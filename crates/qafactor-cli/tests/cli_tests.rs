//! CLI command parsing and run file tests.
//!
//! The CLI is a binary crate, so argument parsing is tested on a mirror of
//! its clap structs and run files through the library types they wrap.

// ============================================================================
// Clap argument parsing
// ============================================================================

mod clap_parsing {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qafactor")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(short, long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Search {
            #[arg(short, long)]
            output: Option<PathBuf>,
        },
        Factor {
            #[arg(short, long)]
            product: u64,
            #[arg(long)]
            placement: Option<PathBuf>,
            #[arg(short, long)]
            reads: Option<u32>,
            #[arg(short, long)]
            output: Option<PathBuf>,
        },
        Sweep {
            #[arg(short = 'P', long, value_delimiter = ',', required = true)]
            products: Vec<u64>,
            #[arg(short = 'n', long, default_value = "1")]
            trials: u32,
            #[arg(short, long, default_value = "runs")]
            output_dir: PathBuf,
            #[arg(long)]
            placement: Option<PathBuf>,
            #[arg(short, long)]
            reads: Option<u32>,
        },
        Report {
            #[arg(short, long, default_value = "runs")]
            dir: PathBuf,
            #[arg(short, long, default_value = "table")]
            format: String,
        },
        Version,
    }

    #[test]
    fn test_search_defaults() {
        let cli = TestCli::try_parse_from(["qafactor", "search"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        match cli.command {
            TestCommands::Search { output } => assert!(output.is_none()),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = TestCli::try_parse_from([
            "qafactor", "search", "--config", "run.yaml", "-o", "best.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("run.yaml")));
        match cli.command {
            TestCommands::Search { output } => {
                assert_eq!(output, Some(PathBuf::from("best.json")));
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_factor_all_options() {
        let cli = TestCli::try_parse_from([
            "qafactor",
            "factor",
            "-p",
            "21",
            "--placement",
            "best.json",
            "-r",
            "500",
            "-o",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Factor {
                product,
                placement,
                reads,
                output,
            } => {
                assert_eq!(product, 21);
                assert_eq!(placement, Some(PathBuf::from("best.json")));
                assert_eq!(reads, Some(500));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Factor command"),
        }
    }

    #[test]
    fn test_factor_requires_product() {
        assert!(TestCli::try_parse_from(["qafactor", "factor"]).is_err());
        assert!(TestCli::try_parse_from(["qafactor", "factor", "-p", "-3"]).is_err());
        assert!(TestCli::try_parse_from(["qafactor", "factor", "-p", "twelve"]).is_err());
    }

    #[test]
    fn test_sweep_product_list() {
        let cli =
            TestCli::try_parse_from(["qafactor", "sweep", "-P", "49,21,12", "-n", "10"]).unwrap();
        match cli.command {
            TestCommands::Sweep {
                products,
                trials,
                output_dir,
                placement,
                reads,
            } => {
                assert_eq!(products, vec![49, 21, 12]);
                assert_eq!(trials, 10);
                assert_eq!(output_dir, PathBuf::from("runs"));
                assert!(placement.is_none());
                assert!(reads.is_none());
            }
            _ => panic!("Expected Sweep command"),
        }
    }

    #[test]
    fn test_sweep_requires_products() {
        assert!(TestCli::try_parse_from(["qafactor", "sweep"]).is_err());
    }

    #[test]
    fn test_report_defaults() {
        let cli = TestCli::try_parse_from(["qafactor", "report"]).unwrap();
        match cli.command {
            TestCommands::Report { dir, format } => {
                assert_eq!(dir, PathBuf::from("runs"));
                assert_eq!(format, "table");
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        for (args, level) in [
            (vec!["qafactor", "version"], 0),
            (vec!["qafactor", "-v", "version"], 1),
            (vec!["qafactor", "-vv", "version"], 2),
            (vec!["qafactor", "version", "-vvv"], 3),
        ] {
            let cli = TestCli::try_parse_from(args).unwrap();
            assert_eq!(cli.verbose, level);
            assert!(matches!(cli.command, TestCommands::Version));
        }
    }

    #[test]
    fn test_no_subcommand() {
        assert!(TestCli::try_parse_from(["qafactor"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["qafactor", "anneal"]).is_err());
    }
}

// ============================================================================
// Run file tests
// ============================================================================

mod run_files {
    use std::fs;

    use qafactor_adapter_sim::AnnealingSimulator;
    use qafactor_embed::{OffsetStrategy, SearchBounds};
    use qafactor_factor::{ChainBreakPolicy, FactoringConfig};
    use qafactor_hal::{Sampler, SamplerConfig, SamplerFactory};

    #[test]
    fn test_factoring_section() {
        let yaml = "
num_reads: 250
offset_strategy: zeroed
chain_break: majority_vote
parallel_search: false
search_bounds:
  max_row_offset: 3
  max_col_offset: 4
";
        let config: FactoringConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.num_reads, 250);
        assert_eq!(config.offset_strategy, OffsetStrategy::Zeroed);
        assert_eq!(config.chain_break, ChainBreakPolicy::MajorityVote);
        assert!(!config.parallel_search);
        assert_eq!(config.search_bounds, Some(SearchBounds::new(3, 4)));
        assert_eq!(config.delay_base, 2.0);
    }

    #[test]
    fn test_bad_strategy_rejected() {
        let result: Result<FactoringConfig, _> =
            serde_yaml_ng::from_str("offset_strategy: widest\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_sampler_section_builds_simulator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sampler.yaml");
        fs::write(
            &path,
            "name: simulator\nrows: 4\ncols: 6\nbroken_qubits: [0, 5]\nseed: 9\n",
        )
        .unwrap();

        let source = fs::read_to_string(&path).unwrap();
        let config: SamplerConfig = serde_yaml_ng::from_str(&source).unwrap();
        assert_eq!(config.name, "simulator");
        assert_eq!(config.extra_u64("seed"), Some(9));

        let simulator = AnnealingSimulator::from_config(config).unwrap();
        let properties = simulator.properties();
        assert_eq!(properties.num_qubits(), 4 * 6 * 8);
        assert_eq!(properties.qubits.len(), 4 * 6 * 8 - 2);
        assert!(!properties.qubits.contains(&5));
    }

    #[test]
    fn test_sampler_section_bad_value() {
        let config: SamplerConfig =
            serde_yaml_ng::from_str("name: simulator\nsweeps: many\n").unwrap();
        assert!(AnnealingSimulator::from_config(config).is_err());
    }
}
