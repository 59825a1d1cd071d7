//! 地圖文字格式常數

/// 每個大格在地圖文字中佔的行數（上緣、中心、下緣）
pub const ROWS_PER_CELL: usize = 3;

/// 每個大格在地圖文字中佔的欄數（左、中、右、間隔）
pub const COLS_PER_CELL: usize = 4;

/// 岩石
pub const ROCK_SYMBOL: char = '#';

/// 空地
pub const EMPTY_SYMBOL: char = ' ';

/// 金礦（只出現在中心）
pub const GOLD_SYMBOL: char = 'G';

/// 紅寶石（只出現在中心）
pub const RUBY_SYMBOL: char = '*';
