use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parser syntax for a file: plain `.ts` files must not enable JSX, or generic arrow
/// functions (`<T>(x: T) => x`) fail to parse.
fn syntax_for(file_path: &str) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: !file_path.ends_with(".ts"),
        dts: file_path.ends_with(".d.ts"),
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code into an AST.
///
/// Each caller owns its `SourceMap`, so files can be parsed on separate threads.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e.kind()))?;

        Ok(ParsedModule { module, source_map })
    })
}
