const FILE_PREFIX: &str = "驗收單";
const UNNAMED: &str = "未命名";

/// `驗收單_<customer>.<ext>`, with `未命名` standing in for a blank name.
pub fn receipt_file_name(customer_name: &str, extension: &str) -> String {
    let trimmed = customer_name.trim();
    let stem: String = if trimmed.is_empty() {
        UNNAMED.to_string()
    } else {
        trimmed
            .chars()
            .map(|ch| match ch {
                '/' | '\\' | ':' => '_',
                ch if ch.is_control() => '_',
                ch => ch,
            })
            .collect()
    };

    format!("{FILE_PREFIX}_{stem}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_customer_name() {
        assert_eq!(receipt_file_name("Chen", "png"), "驗收單_Chen.png");
        assert_eq!(receipt_file_name(" 王小明 ", "txt"), "驗收單_王小明.txt");
    }

    #[test]
    fn falls_back_when_blank() {
        assert_eq!(receipt_file_name("", "png"), "驗收單_未命名.png");
        assert_eq!(receipt_file_name("   ", "png"), "驗收單_未命名.png");
    }

    #[test]
    fn strips_path_separators() {
        assert_eq!(receipt_file_name("../etc/x", "txt"), "驗收單_.._etc_x.txt");
    }
}
