mod mask_file;
mod pair_list;

pub use mask_file::{
    expand_source, load_lumi_mask, lumi_list_from_file, save_lumi_mask, write_lumi_mask,
};
pub use pair_list::parse_pairs;

#[cfg(test)]
mod tests {
    use crate::lumimask::json_summary;
    use crate::util::tests::tests_data;

    use super::{load_lumi_mask, parse_pairs};

    #[test]
    fn test_pairs_fixture_matches_summary() {
        let path = tests_data().join("pairs.txt");
        let content = std::fs::read_to_string(&path).unwrap();
        let pairs = parse_pairs(&content, &path).unwrap();
        assert_eq!(
            json_summary(pairs),
            load_lumi_mask(&tests_data().join("summary.json")).unwrap()
        );
    }
}
