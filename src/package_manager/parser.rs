//! nx 输出解析函数

/// 从 `nx affected:apps --plain` 的输出中提取应用名。
///
/// 不同包管理器会在真实输出前后打印命令回显和 `Done in ...` 之类的横幅行：
///
/// ```text
/// $ nx affected:apps --plain
/// app-one app-two
/// Done in 1.2s
/// ```
///
/// 若找到回显行，且结束行紧随其后第二行（即中间恰好一行）或根本没有结束行，则只保留回显的下一行；
/// 其余情况保持原样。最后把所有行按空白重新切分。
///
/// 空白字符包含 BOM（U+FEFF），与 nx 所在的 Node 环境一致。
pub fn parse_affected_apps(output: &[String]) -> Vec<String> {
    let mut lines: Vec<&str> = output
        .iter()
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .inspect(|line| log::debug!("LINE>>{}<<", line))
        .collect();

    let i_start = lines
        .iter()
        .position(|line| line.contains("nx") && line.contains("affected:apps"));
    let i_end = lines.iter().position(|line| line.starts_with("Done in"));
    log::debug!("iStart: {:?}", i_start);
    log::debug!("iEnd: {:?}", i_end);

    // 只认 "恰好一行内容" 这一种横幅形态，输出格式变化时不会折叠
    if let Some(start) = i_start {
        if i_end.is_none() || i_end == Some(start + 2) {
            lines = lines.get(start + 1).copied().into_iter().collect();
        }
    }

    lines
        .join(" ")
        .split(is_space)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
