//! Таблицы языка запросов (SDBL) и языка ограничений доступа

use once_cell::sync::Lazy;

use super::WordSet;

/// Word tables of a query-like dialect, looked up in disambiguation order
#[derive(Debug)]
pub struct QueryWords {
    /// Builtin only in call position
    pub functions: WordSet,
    pub constants: WordSet,
    pub declarations: WordSet,
    pub classes: WordSet,
}

const QUERY_CONSTANTS: &[&str] = &[
    "Неопределено", "Undefined", "Истина", "True", "Ложь", "False", "NULL",
];

pub static SDBL: Lazy<QueryWords> = Lazy::new(|| QueryWords {
    functions: WordSet::new(&[
        // Агрегатные
        "СУММА", "SUM", "МАКСИМУМ", "MAX", "МИНИМУМ", "MIN",
        "СРЕДНЕЕ", "AVG", "КОЛИЧЕСТВО", "COUNT",
        // Строки и значения
        "ПОДСТРОКА", "SUBSTRING", "ЕСТЬNULL", "ISNULL",
        "ПРЕДСТАВЛЕНИЕ", "PRESENTATION", "ПРЕДСТАВЛЕНИЕССЫЛКИ", "REFPRESENTATION",
        "ТИПЗНАЧЕНИЯ", "VALUETYPE", "ТИП", "TYPE", "ЗНАЧЕНИЕ", "VALUE",
        "ДЛИНАСТРОКИ", "STRINGLENGTH", "СТРНАЙТИ", "STRFIND",
        "СТРЗАМЕНИТЬ", "STRREPLACE", "СОКРЛП", "TRIMALL", "СОКРЛ", "TRIML", "СОКРП", "TRIMR",
        "ВРЕГ", "UPPER", "НРЕГ", "LOWER", "ЛЕВ", "LEFT", "ПРАВ", "RIGHT",
        "РАЗМЕРХРАНИМЫХДАННЫХ", "STOREDDATASIZE", "УНИКАЛЬНЫЙИДЕНТИФИКАТОР", "UUID",
        "АВТОНОМЕРЗАПИСИ", "RECORDAUTONUMBER",
        // Даты
        "ДАТАВРЕМЯ", "DATETIME", "ГОД", "YEAR", "КВАРТАЛ", "QUARTER", "МЕСЯЦ", "MONTH",
        "ДЕНЬГОДА", "DAYOFYEAR", "ДЕНЬ", "DAY", "НЕДЕЛЯ", "WEEK", "ДЕНЬНЕДЕЛИ", "WEEKDAY",
        "ЧАС", "HOUR", "МИНУТА", "MINUTE", "СЕКУНДА", "SECOND",
        "НАЧАЛОПЕРИОДА", "BEGINOFPERIOD", "КОНЕЦПЕРИОДА", "ENDOFPERIOD",
        "ДОБАВИТЬКДАТЕ", "DATEADD", "РАЗНОСТЬДАТ", "DATEDIFF",
        // Математика
        "ЦЕЛ", "INT", "ОКР", "ROUND", "ACOS", "ASIN", "ATAN", "COS", "SIN", "TAN",
        "EXP", "LOG", "LOG10", "POW", "SQRT",
    ]),
    constants: WordSet::new(QUERY_CONSTANTS),
    declarations: WordSet::new(&[
        "ВЫБРАТЬ", "SELECT", "РАЗРЕШЕННЫЕ", "ALLOWED", "РАЗЛИЧНЫЕ", "DISTINCT",
        "ПЕРВЫЕ", "TOP", "КАК", "AS", "ПУСТАЯТАБЛИЦА", "EMPTYTABLE",
        "ПОМЕСТИТЬ", "INTO", "УНИЧТОЖИТЬ", "DROP", "ИЗ", "FROM",
        "ЛЕВОЕ", "LEFT", "ПРАВОЕ", "RIGHT", "ПОЛНОЕ", "FULL",
        "ВНЕШНЕЕ", "OUTER", "ВНУТРЕННЕЕ", "INNER", "СОЕДИНЕНИЕ", "JOIN",
        "ГДЕ", "WHERE", "СГРУППИРОВАТЬ", "GROUP", "ПО", "BY", "ON",
        "ИМЕЮЩИЕ", "HAVING", "ОБЪЕДИНИТЬ", "UNION", "ВСЕ", "ALL",
        "УПОРЯДОЧИТЬ", "ORDER", "АВТОУПОРЯДОЧИВАНИЕ", "AUTOORDER",
        "ИТОГИ", "TOTALS", "ОБЩИЕ", "OVERALL", "ТОЛЬКО", "ONLY",
        "ИЕРАРХИЯ", "HIERARCHY", "ПЕРИОДАМИ", "PERIODS",
        "ИНДЕКСИРОВАТЬ", "INDEX", "ВЫРАЗИТЬ", "CAST",
        "ВОЗР", "ASC", "УБЫВ", "DESC", "ДЛЯ", "FOR", "ИЗМЕНЕНИЯ", "UPDATE", "OF",
        "СПЕЦСИМВОЛ", "ESCAPE", "СГРУППИРОВАНОПО", "GROUPEDBY",
        "НАБОРАМ", "SETS", "ГРУППИРУЮЩИМ", "GROUPING",
        "ВЫБОР", "CASE", "КОГДА", "WHEN", "ТОГДА", "THEN", "ИНАЧЕ", "ELSE", "КОНЕЦ", "END",
        "И", "AND", "ИЛИ", "OR", "НЕ", "NOT", "В", "IN", "ИЕРАРХИИ",
        "ЕСТЬ", "IS", "ПОДОБНО", "LIKE", "МЕЖДУ", "BETWEEN", "ССЫЛКА", "REFS",
    ]),
    classes: WordSet::new(METADATA_TABLES),
});

/// Корни имён таблиц метаданных в тексте запроса
const METADATA_TABLES: &[&str] = &[
    "Справочник", "Catalog", "Документ", "Document",
    "Перечисление", "Enum", "Константа", "Constant",
    "РегистрСведений", "InformationRegister",
    "РегистрНакопления", "AccumulationRegister",
    "РегистрБухгалтерии", "AccountingRegister",
    "РегистрРасчета", "CalculationRegister",
    "ПланСчетов", "ChartOfAccounts",
    "ПланВидовХарактеристик", "ChartOfCharacteristicTypes",
    "ПланВидовРасчета", "ChartOfCalculationTypes",
    "ПланОбмена", "ExchangePlan",
    "БизнесПроцесс", "BusinessProcess", "Задача", "Task",
    "ЖурналДокументов", "DocumentJournal",
    "Последовательность", "Sequence",
    "КритерийОтбора", "FilterCriterion",
    "ВнешнийИсточникДанных", "ExternalDataSource",
];

pub static CONSTRAINT: Lazy<QueryWords> = Lazy::new(|| QueryWords {
    functions: WordSet::new(&[ACCESS_PREDICATES, CONSTRAINT_VALUE_FUNCTIONS].concat()),
    constants: WordSet::new(QUERY_CONSTANTS),
    declarations: WordSet::new(&[
        "РазрешитьЧтениеИзменение", "AllowReadUpdate",
        "РазрешитьЧтение", "AllowRead",
        "РазрешитьИзменениеЕслиРазрешеноЧтение", "AllowUpdateIfReadingAllowed",
        "ПрисоединитьДополнительныеТаблицы", "AttachAdditionalTables",
        "ГДЕ", "WHERE", "И", "AND", "ИЛИ", "OR", "НЕ", "NOT",
        "КАК", "AS", "В", "IN", "ИЕРАРХИИ", "HIERARCHY", "ЕСТЬ", "IS",
        "ВЫБОР", "CASE", "КОГДА", "WHEN", "ТОГДА", "THEN", "ИНАЧЕ", "ELSE",
        "КОНЕЦ", "END", "ССЫЛКА", "REFS", "ПОДОБНО", "LIKE",
        "ЛЕВОЕ", "LEFT", "СОЕДИНЕНИЕ", "JOIN", "ПО", "ON",
    ]),
    classes: WordSet::new(METADATA_TABLES),
});

/// Предикаты ограничений доступа; их вызов в литерале выдаёт текст ограничения
pub const ACCESS_PREDICATES: &[&str] = &[
    "ЧтениеОбъектаРазрешено", "ObjectReadingAllowed",
    "ИзменениеОбъектаРазрешено", "ObjectUpdateAllowed",
    "ЧтениеСпискаРазрешено", "ListReadingAllowed",
    "ИзменениеСпискаРазрешено", "ListUpdateAllowed",
    "ЗначениеРазрешено", "ValueAllowed",
    "ЭтоАвторизованныйПользователь", "IsAuthorizedUser",
    "ПравоДоступа", "AccessRight", "РольДоступна", "IsInRole",
];

const CONSTRAINT_VALUE_FUNCTIONS: &[&str] =
    &["ТипЗначения", "ValueType", "ЗНАЧЕНИЕ", "VALUE", "ТИП", "TYPE"];

/// Первое слово литерала, после которого он считается текстом запроса
pub static QUERY_INTRODUCERS: Lazy<WordSet> =
    Lazy::new(|| WordSet::new(&["ВЫБРАТЬ", "SELECT", "УНИЧТОЖИТЬ", "DROP"]));

pub static CONSTRAINT_INTRODUCERS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "РазрешитьЧтениеИзменение", "AllowReadUpdate",
        "РазрешитьЧтение", "AllowRead",
        "РазрешитьИзменениеЕслиРазрешеноЧтение", "AllowUpdateIfReadingAllowed",
        "ПрисоединитьДополнительныеТаблицы", "AttachAdditionalTables",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdbl_tables() {
        assert!(SDBL.declarations.contains("выбрать"));
        assert!(SDBL.declarations.contains("Как"));
        assert!(SDBL.constants.contains("неопределено"));
        assert!(SDBL.functions.contains("ЕстьNull"));
        assert!(SDBL.classes.contains("РегистрСведений"));
        assert!(!SDBL.declarations.contains("Поле"));
    }

    #[test]
    fn test_constraint_tables() {
        assert!(CONSTRAINT.functions.contains("ЧтениеОбъектаРазрешено"));
        assert!(CONSTRAINT.functions.contains("значение"));
        assert!(CONSTRAINT.declarations.contains("РазрешитьЧтениеИзменение"));
        assert!(CONSTRAINT_INTRODUCERS.contains("allowread"));
        assert!(QUERY_INTRODUCERS.contains("Уничтожить"));
    }
}
