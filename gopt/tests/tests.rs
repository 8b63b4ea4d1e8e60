#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Instant;

    use glassopt::io::export::export;
    use glassopt::io::import::import_instance;
    use glassopt::io::svg::{PageOptions, SvgDrawOptions, cutting_guide_pages, sheet_to_svg};
    use glassopt::packer::{MultiSheetPacker, Termination};
    use glassopt::util::{PackConfig, assertions};
    use gopt::config::GOptConfig;
    use gopt::io;
    use gopt::io::output::Output;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    #[test_case("../assets/glass_default.json"; "glass_default")]
    #[test_case("../assets/shopfront.json"; "shopfront")]
    #[test_case("../assets/oversized.json"; "oversized")]
    #[test_case("../assets/one_per_sheet.json"; "one_per_sheet")]
    fn test_instance(instance_path: &str) {
        init_logger();
        let ext_instance = io::read_json_instance(Path::new(instance_path)).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        let epoch = Instant::now();
        let packer = MultiSheetPacker::new(instance.sheet, PackConfig::default());
        let sol = packer.solve(instance.pieces());

        assert_eq!(sol.termination, Termination::Completed);
        assert!(sol.unplaced.is_empty());
        assert!(assertions::pieces_conserved(
            &instance.pieces(),
            &sol.sheets,
            &sol.oversized,
            &sol.unplaced
        ));
        for sheet in &sol.sheets {
            assert!(!sheet.is_empty());
            assert!(assertions::placements_are_valid(&sheet.sheet, &sheet.placements));
            assert!(assertions::sheet_stats_consistent(sheet));
        }

        //a second run on the same input gives the same layouts
        assert_eq!(packer.solve(instance.pieces()).sheets, sol.sheets);

        let ext_solution = export(&instance, &sol, epoch);
        assert_eq!(ext_solution.sheets.len(), sol.sheets.len());
        assert_eq!(
            ext_solution
                .sheets
                .iter()
                .map(|s| s.placements.len())
                .sum::<usize>(),
            sol.placed_count()
        );

        for sheet in &sol.sheets {
            let svg = sheet_to_svg(sheet, &instance, SvgDrawOptions::default(), "test");
            assert!(!svg.to_string().is_empty());
        }
        let pages = cutting_guide_pages(&sol.sheets, &PageOptions::default());
        assert_eq!(pages.len(), sol.sheets.len());
    }

    #[test]
    fn oversized_pieces_are_reported() {
        init_logger();
        let ext_instance = io::read_json_instance(Path::new("../assets/oversized.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();
        let sol = MultiSheetPacker::new(instance.sheet, PackConfig::default())
            .solve(instance.pieces());
        let ext_solution = export(&instance, &sol, Instant::now());

        assert_eq!(ext_solution.oversized_pieces, vec!["wall_0"]);
        assert_eq!(sol.placed_count(), 8);
        assert!(!sol.is_complete());
    }

    #[test]
    fn one_piece_per_sheet() {
        let ext_instance =
            io::read_json_instance(Path::new("../assets/one_per_sheet.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();
        let sol = MultiSheetPacker::new(instance.sheet, PackConfig::default())
            .solve(instance.pieces());

        assert_eq!(sol.sheets.len(), 4);
        assert!(sol.sheets.iter().all(|s| s.stats.placed_count == 1));
    }

    #[test]
    fn sheet_limit_from_config() {
        let config: GOptConfig =
            serde_json::from_str(r#"{"pack_config": {"max_sheets": 2}}"#).unwrap();
        let ext_instance =
            io::read_json_instance(Path::new("../assets/one_per_sheet.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();
        let sol = MultiSheetPacker::new(instance.sheet, config.pack_config)
            .solve(instance.pieces());

        assert_eq!(sol.termination, Termination::SheetLimit);
        assert_eq!(sol.sheets.len(), 2);
        assert_eq!(sol.unplaced.len(), 2);
    }

    #[test]
    fn missing_instance_file_is_an_error() {
        assert!(io::read_json_instance(Path::new("../assets/does_not_exist.json")).is_err());
    }

    #[test]
    fn output_is_written() {
        init_logger();
        let ext_instance =
            io::read_json_instance(Path::new("../assets/glass_default.json")).unwrap();
        let instance = import_instance(&ext_instance).unwrap();
        let config = GOptConfig::default();
        let sol = MultiSheetPacker::new(instance.sheet, config.pack_config)
            .solve(instance.pieces());

        let folder = std::env::temp_dir().join("gopt_output_is_written");
        std::fs::create_dir_all(&folder).unwrap();

        let output = Output {
            instance: ext_instance,
            solution: export(&instance, &sol, Instant::now()),
            config,
        };
        let json_path = folder.join("sol_glass_default.json");
        io::write_json(&output, &json_path).unwrap();

        let svg_path = folder.join("sol_glass_default_0.svg");
        let svg = sheet_to_svg(&sol.sheets[0], &instance, SvgDrawOptions::default(), "");
        io::write_svg(&svg, &svg_path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(written["name"], "glass_default");
        assert_eq!(written["solution"]["termination"], "completed");
        assert!(written["config"]["pack_config"]["max_sheets"].is_number());
        assert!(svg_path.exists());
    }
}
