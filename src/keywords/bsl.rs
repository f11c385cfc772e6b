//! Таблицы встроенного языка (BSL)
//!
//! Пересекающиеся таблицы разводятся при построении: слова «только вызов»
//! (`Строка`, `Число`, …) и конструктор `Новый` исключены из общих таблиц
//! встроенных функций и классов, исключение `ВызватьИсключение` исключено
//! из ключевых слов.

use once_cell::sync::Lazy;

use super::{casefold, WordSet};

/// Table-level classification, in disambiguation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Exception,
    Constructor,
    CallOnly,
    Declaration,
    Constant,
    Keyword,
    Builtin,
    Class,
}

/// Looks a word up in the BSL tables, first table in chain order wins
pub fn classify_word(word: &str) -> Option<WordClass> {
    let folded = casefold(word);
    let tables: [(&WordSet, WordClass); 8] = [
        (&*EXCEPTIONS, WordClass::Exception),
        (&*CONSTRUCTORS, WordClass::Constructor),
        (&*CALL_ONLY, WordClass::CallOnly),
        (&*DECLARATIONS, WordClass::Declaration),
        (&*CONSTANTS, WordClass::Constant),
        (&*KEYWORDS, WordClass::Keyword),
        (&*BUILTINS, WordClass::Builtin),
        (&*CLASSES, WordClass::Class),
    ];
    tables
        .into_iter()
        .find(|(set, _)| set.contains_folded(&folded))
        .map(|(_, class)| class)
}

pub static EXCEPTIONS: Lazy<WordSet> =
    Lazy::new(|| WordSet::new(&["ВызватьИсключение", "Raise"]));

/// Слова, которые в позиции вызова становятся встроенной функцией
pub static CONSTRUCTORS: Lazy<WordSet> = Lazy::new(|| WordSet::new(&["Новый", "New"]));

/// Приведение типов: встроенная функция только при вызове, иначе имя переменной
pub static CALL_ONLY: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Булево", "Boolean", "Число", "Number", "Строка", "String", "Дата", "Date", "Тип", "Type",
    ])
});

pub static DECLARATIONS: Lazy<WordSet> = Lazy::new(|| WordSet::new(&["Перем", "Var"]));

pub static CONSTANTS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Неопределено", "Undefined", "Истина", "True", "Ложь", "False", "NULL",
    ])
});

const KEYWORD_WORDS: &[&str] = &[
    // Объявления
    "Процедура", "Procedure", "Функция", "Function",
    "КонецПроцедуры", "EndProcedure", "КонецФункции", "EndFunction",
    "Экспорт", "Export", "Знач", "Val",
    // Управление потоком
    "Прервать", "Break", "Продолжить", "Continue", "Возврат", "Return",
    "Если", "If", "Иначе", "Else", "ИначеЕсли", "ElsIf",
    "Тогда", "Then", "КонецЕсли", "EndIf",
    "Попытка", "Try", "Исключение", "Except", "КонецПопытки", "EndTry",
    "Пока", "While", "Для", "For", "Каждого", "Each",
    "Из", "In", "По", "To", "Цикл", "Do", "КонецЦикла", "EndDo",
    "Перейти", "Goto",
    // Логические операторы
    "НЕ", "NOT", "И", "AND", "ИЛИ", "OR",
    "Новый", "New",
    // Асинхронность
    "Асинх", "Async", "Ждать", "Await",
    // Прочие операторы
    "Выполнить", "Execute",
    "ДобавитьОбработчик", "AddHandler", "УдалитьОбработчик", "RemoveHandler",
];

pub static KEYWORDS: Lazy<WordSet> = Lazy::new(|| WordSet::new(KEYWORD_WORDS).without(&EXCEPTIONS));

/// Глобальный контекст - процедуры и функции
const BUILTIN_WORDS: &[&str] = &[
    // функции работы со значениями типа Строка
    "Новый", "New", "СтрДлина", "StrLen",
    "СокрЛ", "TrimL", "СокрП", "TrimR", "СокрЛП", "TrimAll",
    "Лев", "Left", "Прав", "Right", "Сред", "Mid",
    "СтрНайти", "StrFind",
    "ВРег", "Upper", "НРег", "Lower", "ТРег", "Title",
    "Символ", "Char", "КодСимвола", "CharCode",
    "ПустаяСтрока", "IsBlankString",
    "СтрЗаменить", "StrReplace",
    "СтрЧислоСтрок", "StrLineCount",
    "СтрПолучитьСтроку", "StrGetLine",
    "СтрЧислоВхождений", "StrOccurrenceCount",
    "СтрСравнить", "StrCompare",
    "СтрНачинаетсяС", "StrStartWith",
    "СтрЗаканчиваетсяНа", "StrEndsWith",
    "СтрРазделить", "StrSplit",
    "СтрСоединить", "StrConcat",
    // функции работы со значениями типа Число
    "Цел", "Int", "Окр", "Round",
    "ACos", "ACos", "ASin", "ASin", "ATan", "ATan",
    "Cos", "Cos", "Exp", "Exp", "Log", "Log", "Log10", "Log10",
    "Pow", "Pow", "Sin", "Sin", "Sqrt", "Sqrt", "Tan", "Tan",
    // функции работы со значениями типа Дата
    "Год", "Year", "Месяц", "Month", "День", "Day",
    "Час", "Hour", "Минута", "Minute", "Секунда", "Second",
    "НачалоГода", "BegOfYear",
    "НачалоДня", "BegOfDay",
    "НачалоКвартала", "BegOfQuarter",
    "НачалоМесяца", "BegOfMonth",
    "НачалоМинуты", "BegOfMinute",
    "НачалоНедели", "BegOfWeek",
    "НачалоЧаса", "BegOfHour",
    "КонецГода", "EndOfYear",
    "КонецДня", "EndOfDay",
    "КонецКвартала", "EndOfQuarter",
    "КонецМесяца", "EndOfMonth",
    "КонецМинуты", "EndOfMinute",
    "КонецНедели", "EndOfWeek",
    "КонецЧаса", "EndOfHour",
    "НеделяГода", "WeekOfYear",
    "ДеньГода", "DayOfYear",
    "ДеньНедели", "WeekDay",
    "ТекущаяДата", "CurrentDate",
    "ДобавитьМесяц", "AddMonth",
    // функции работы со значениями типа Тип
    "Тип", "Type", "ТипЗнч", "TypeOf",
    // функции преобразования значений
    "Булево", "Boolean", "Число", "Number",
    "Строка", "String", "Дата", "Date",
    // процедуры и функции интерактивной работы
    "ПоказатьВопрос", "ShowQueryBox",
    "Вопрос", "DoQueryBox",
    "ПоказатьПредупреждение", "ShowMessageBox",
    "Предупреждение", "DoMessageBox",
    "Сообщить", "Message",
    "ОчиститьСообщения", "ClearMessages",
    "ОповеститьОбИзменении", "NotifyChanged",
    "Состояние", "Status",
    "Сигнал", "Beep",
    "ПоказатьЗначение", "ShowValue",
    "ОткрытьЗначение", "OpenValue",
    "Оповестить", "Notify",
    "ОбработкаПрерыванияПользователя", "UserInterruptProcessing",
    "ОткрытьСодержаниеСправки", "OpenHelpContent",
    "ОткрытьИндексСправки", "OpenHelpIndex",
    "ОткрытьСправку", "OpenHelp",
    "ПоказатьИнформациюОбОшибке", "ShowErrorInfo",
    "КраткоеПредставлениеОшибки", "BriefErrorDescription",
    "ПодробноеПредставлениеОшибки", "DetailErrorDescription",
    "ПолучитьФорму", "GetForm",
    "ЗакрытьСправку", "CloseHelp",
    "ПоказатьОповещениеПользователя", "ShowUserNotification",
    "ОткрытьФорму", "OpenForm",
    "ОткрытьФормуМодально", "OpenFormModal",
    "АктивноеОкно", "ActiveWindow",
    "ВыполнитьОбработкуОповещения", "ExecuteNotifyProcessing",
    // функции для вызова диалога ввода данных
    "ПоказатьВводЗначения", "ShowInputValue",
    "ВвестиЗначение", "InputValue",
    "ПоказатьВводЧисла", "ShowInputNumber",
    "ВвестиЧисло", "InputNumber",
    "ПоказатьВводСтроки", "ShowInputString",
    "ВвестиСтроку", "InputString",
    "ПоказатьВводДаты", "ShowInputDate",
    "ВвестиДату", "InputDate",
    // функции форматирования
    "Формат", "Format",
    "ЧислоПрописью", "NumberInWords",
    "НСтр", "NStr",
    "ПредставлениеПериода", "PeriodPresentation",
    "СтрШаблон", "StrTemplate",
    // функции обращения к конфигурации
    "ПолучитьОбщийМакет", "GetCommonTemplate",
    "ПолучитьОбщуюФорму", "GetCommonForm",
    "ПредопределенноеЗначение", "PredefinedValue",
    "ПолучитьПолноеИмяПредопределенногоЗначения", "GetPredefinedValueFullName",
    // процедуры и функции сеанса работы
    "ПолучитьЗаголовокСистемы", "GetCaption",
    "ПолучитьСкоростьКлиентскогоСоединения", "GetClientConnectionSpeed",
    "ПодключитьОбработчикОжидания", "AttachIdleHandler",
    "УстановитьЗаголовокСистемы", "SetCaption",
    "ОтключитьОбработчикОжидания", "DetachIdleHandler",
    "ИмяКомпьютера", "ComputerName",
    "ЗавершитьРаботуСистемы", "Exit",
    "ИмяПользователя", "UserName",
    "ПрекратитьРаботуСистемы", "Terminate",
    "ПолноеИмяПользователя", "UserFullName",
    "ЗаблокироватьРаботуПользователя", "LockApplication",
    "КаталогПрограммы", "BinDir",
    "КаталогВременныхФайлов", "TempFilesDir",
    "ПравоДоступа", "AccessRight",
    "РольДоступна", "IsInRole",
    "ТекущийЯзык", "CurrentLanguage",
    "ТекущийКодЛокализации", "CurrentLocaleCode",
    "СтрокаСоединенияИнформационнойБазы", "InfoBaseConnectionString",
    "ПодключитьОбработчикОповещения", "AttachNotificationHandler",
    "ОтключитьОбработчикОповещения", "DetachNotificationHandler",
    "ПолучитьСообщенияПользователю", "GetUserMessages",
    "ПараметрыДоступа", "AccessParameters",
    "ПредставлениеПриложения", "ApplicationPresentation",
    "ТекущийЯзыкСистемы", "CurrentSystemLanguage",
    "ЗапуститьСистему", "RunSystem",
    "ТекущийРежимЗапуска", "CurrentRunMode",
    "УстановитьЧасовойПоясСеанса", "SetSessionTimeZone",
    "ЧасовойПоясСеанса", "SessionTimeZone",
    "ТекущаяДатаСеанса", "CurrentSessionDate",
    "УстановитьКраткийЗаголовокПриложения", "SetShortApplicationCaption",
    "ПолучитьКраткийЗаголовокПриложения", "GetShortApplicationCaption",
    "ПредставлениеПрава", "RightPresentation",
    "ВыполнитьПроверкуПравДоступа", "VerifyAccessRights",
    "РабочийКаталогДанныхПользователя", "UserDataWorkDir",
    "КаталогДокументов", "DocumentsDir",
    "ПолучитьИнформациюЭкрановКлиента", "GetClientDisplaysInformation",
    "ТекущийВариантОсновногоШрифтаКлиентскогоПриложения", "ClientApplicationBaseFontCurrentVariant",
    "ТекущийВариантИнтерфейсаКлиентскогоПриложения", "ClientApplicationInterfaceCurrentVariant",
    "УстановитьЗаголовокКлиентскогоПриложения", "SetClientApplicationCaption",
    "ПолучитьЗаголовокКлиентскогоПриложения", "GetClientApplicationCaption",
    "НачатьПолучениеКаталогаВременныхФайлов", "BeginGettingTempFilesDir",
    "НачатьПолучениеКаталогаДокументов", "BeginGettingDocumentsDir",
    "НачатьПолучениеРабочегоКаталогаДанныхПользователя", "BeginGettingUserDataWorkDir",
    "ПодключитьОбработчикЗапросаНастроекКлиентаЛицензирования", "AttachLicensingClientParametersRequestHandler",
    "ОтключитьОбработчикЗапросаНастроекКлиентаЛицензирования", "DetachLicensingClientParametersRequestHandler",
    // процедуры и функции сохранения значений
    "ЗначениеВСтрокуВнутр", "ValueToStringInternal",
    "ЗначениеИзСтрокиВнутр", "ValueFromStringInternal",
    "ЗначениеВФайл", "ValueToFile",
    "ЗначениеИзФайла", "ValueFromFile",
    // Процедуры и функции работы с операционной системой
    "КомандаСистемы", "System",
    "ЗапуститьПриложение", "RunApp",
    "ПолучитьCOMОбъект", "GetCOMObject",
    "ПользователиОС", "OSUsers",
    "НачатьЗапускПриложения", "BeginRunningApplication",
    // Процедуры и функции работы с внешними компонентами
    "ПодключитьВнешнююКомпоненту", "AttachAddIn",
    "НачатьУстановкуВнешнейКомпоненты", "BeginInstallAddIn",
    "УстановитьВнешнююКомпоненту", "InstallAddIn",
    "НачатьПодключениеВнешнейКомпоненты", "BeginAttachingAddIn",
    // Процедуры и функции работы с файлами
    "КопироватьФайл", "FileCopy",
    "ПереместитьФайл", "MoveFile",
    "УдалитьФайлы", "DeleteFiles",
    "НайтиФайлы", "FindFiles",
    "СоздатьКаталог", "CreateDirectory",
    "ПолучитьИмяВременногоФайла", "GetTempFileName",
    "РазделитьФайл", "SplitFile",
    "ОбъединитьФайлы", "MergeFiles",
    "ПолучитьФайл", "GetFile",
    "НачатьПомещениеФайла", "BeginPutFile",
    "ПоместитьФайл", "PutFile",
    "ЭтоАдресВременногоХранилища", "IsTempStorageURL",
    "УдалитьИзВременногоХранилища", "DeleteFromTempStorage",
    "ПолучитьИзВременногоХранилища", "GetFromTempStorage",
    "ПоместитьВоВременноеХранилище", "PutToTempStorage",
    "ПодключитьРасширениеРаботыСФайлами", "AttachFileSystemExtension",
    "НачатьУстановкуРасширенияРаботыСФайлами", "BeginInstallFileSystemExtension",
    "УстановитьРасширениеРаботыСФайлами", "InstallFileSystemExtension",
    "ПолучитьФайлы", "GetFiles",
    "ПоместитьФайлы", "PutFiles",
    "ЗапроситьРазрешениеПользователя", "RequestUserPermission",
    "ПолучитьМаскуВсеФайлы", "GetAllFilesMask",
    "ПолучитьМаскуВсеФайлыКлиента", "GetClientAllFilesMask",
    "ПолучитьМаскуВсеФайлыСервера", "GetServerAllFilesMask",
    "ПолучитьРазделительПути", "GetPathSeparator",
    "ПолучитьРазделительПутиКлиента", "GetClientPathSeparator",
    "ПолучитьРазделительПутиСервера", "GetServerPathSeparator",
    "НачатьПодключениеРасширенияРаботыСФайлами", "BeginAttachingFileSystemExtension",
    "НачатьЗапросРазрешенияПользователя", "BeginRequestingUserPermission",
    "НачатьПоискФайлов", "BeginFindingFiles",
    "НачатьСозданиеКаталога", "BeginCreatingDirectory",
    "НачатьКопированиеФайла", "BeginCopyingFile",
    "НачатьПеремещениеФайла", "BeginMovingFile",
    "НачатьУдалениеФайлов", "BeginDeletingFiles",
    "НачатьПолучениеФайлов", "BeginGettingFiles",
    "НачатьПомещениеФайлов", "BeginPuttingFiles",
    // Процедуры и функции работы с информационной базой
    "НачатьТранзакцию", "BeginTransaction",
    "ЗафиксироватьТранзакцию", "CommitTransaction",
    "ОтменитьТранзакцию", "RollbackTransaction",
    "УстановитьМонопольныйРежим", "SetExclusiveMode",
    "МонопольныйРежим", "ExclusiveMode",
    "ПолучитьОперативнуюОтметкуВремени", "GetRealTimeTimestamp",
    "ПолучитьСоединенияИнформационнойБазы", "GetInfoBaseConnections",
    "НомерСоединенияИнформационнойБазы", "InfoBaseConnectionNumber",
    "КонфигурацияИзменена", "ConfigurationChanged",
    "КонфигурацияБазыДанныхИзмененаДинамически", "DataBaseConfigurationChangedDynamically",
    "УстановитьВремяОжиданияБлокировкиДанных", "SetLockWaitTime",
    "ОбновитьНумерациюОбъектов", "RefreshObjectsNumbering",
    "ПолучитьВремяОжиданияБлокировкиДанных", "GetLockWaitTime",
    "КодЛокализацииИнформационнойБазы", "InfoBaseLocaleCode",
    "УстановитьМинимальнуюДлинуПаролейПользователей", "SetUserPasswordMinLength",
    "ПолучитьМинимальнуюДлинуПаролейПользователей", "GetUserPasswordMinLength",
    "ИнициализироватьПредопределенныеДанные", "InitializePredefinedData",
    "УдалитьДанныеИнформационнойБазы", "EraseInfoBaseData",
    "УстановитьПроверкуСложностиПаролейПользователей", "SetUserPasswordStrengthCheck",
    "ПолучитьПроверкуСложностиПаролейПользователей", "GetUserPasswordStrengthCheck",
    "ПолучитьСтруктуруХраненияБазыДанных", "GetDBStorageStructureInfo",
    "УстановитьПривилегированныйРежим", "SetPrivilegedMode",
    "ПривилегированныйРежим", "PrivilegedMode",
    "ТранзакцияАктивна", "TransactionActive",
    "НеобходимостьЗавершенияСоединения", "ConnectionStopRequest",
    "НомерСеансаИнформационнойБазы", "InfoBaseSessionNumber",
    "ПолучитьСеансыИнформационнойБазы", "GetInfoBaseSessions",
    "ЗаблокироватьДанныеДляРедактирования", "LockDataForEdit",
    "УстановитьСоединениеСВнешнимИсточникомДанных", "ConnectExternalDataSource",
    "РазблокироватьДанныеДляРедактирования", "UnlockDataForEdit",
    "РазорватьСоединениеСВнешнимИсточникомДанных", "DisconnectExternalDataSource",
    "ПолучитьБлокировкуСеансов", "GetSessionsLock",
    "УстановитьБлокировкуСеансов", "SetSessionsLock",
    "ОбновитьПовторноИспользуемыеЗначения", "RefreshReusableValues",
    "УстановитьБезопасныйРежим", "SetSafeMode",
    "БезопасныйРежим", "SafeMode",
    "ПолучитьДанныеВыбора", "GetChoiceData",
    "УстановитьЧасовойПоясИнформационнойБазы", "SetInfoBaseTimeZone",
    "ПолучитьЧасовойПоясИнформационнойБазы", "GetInfoBaseTimeZone",
    "ПолучитьОбновлениеКонфигурацииБазыДанных", "GetDataBaseConfigurationUpdate",
    "УстановитьБезопасныйРежимРазделенияДанных", "SetDataSeparationSafeMode",
    "БезопасныйРежимРазделенияДанных", "DataSeparationSafeMode",
    "УстановитьВремяЗасыпанияПассивногоСеанса", "SetPassiveSessionHibernateTime",
    "ПолучитьВремяЗасыпанияПассивногоСеанса", "GetPassiveSessionHibernateTime",
    "УстановитьВремяЗавершенияСпящегоСеанса", "SetHibernateSessionTerminateTime",
    "ПолучитьВремяЗавершенияСпящегоСеанса", "GetHibernateSessionTerminateTime",
    "ПолучитьТекущийСеансИнформационнойБазы", "GetCurrentInfoBaseSession",
    "ПолучитьИдентификаторКонфигурации", "GetConfigurationID",
    "УстановитьНастройкиКлиентаЛицензирования", "SetLicensingClientParameters",
    "ПолучитьИмяКлиентаЛицензирования", "GetLicensingClientName",
    "ПолучитьДополнительныйПараметрКлиентаЛицензирования", "GetLicensingClientAdditionalParameter",
    // Процедуры и функции работы с данными информационной базы
    "НайтиПомеченныеНаУдаление", "FindMarkedForDeletion",
    "НайтиПоСсылкам", "FindByRef",
    "УдалитьОбъекты", "DeleteObjects",
    "УстановитьОбновлениеПредопределенныхДанныхИнформационнойБазы", "SetInfoBasePredefinedDataUpdate",
    "ПолучитьОбновлениеПредопределенныхДанныхИнформационнойБазы", "GetInfoBasePredefinedData",
    // Процедуры и функции работы с XML
    "XMLСтрока", "XMLString",
    "XMLЗначение", "XMLValue",
    "XMLТип", "XMLType",
    "XMLТипЗнч", "XMLTypeOf",
    "ИзXMLТипа", "FromXMLType",
    "ВозможностьЧтенияXML", "CanReadXML",
    "ПолучитьXMLТип", "GetXMLType",
    "ПрочитатьXML", "ReadXML",
    "ЗаписатьXML", "WriteXML",
    "НайтиНедопустимыеСимволыXML", "FindDisallowedXMLCharacters",
    "ИмпортМоделиXDTO", "ImportXDTOModel",
    "СоздатьФабрикуXDTO", "CreateXDTOFactory",
    // Процедуры и функции работы с JSON
    "ЗаписатьJSON", "WriteJSON",
    "ПрочитатьJSON", "ReadJSON",
    "ПрочитатьДатуJSON", "ReadJSONDate",
    "ЗаписатьДатуJSON", "WriteJSONDate",
    // Процедуры и функции работы с журналом регистрации
    "ЗаписьЖурналаРегистрации", "WriteLogEvent",
    "ПолучитьИспользованиеЖурналаРегистрации", "GetEventLogUsing",
    "УстановитьИспользованиеЖурналаРегистрации", "SetEventLogUsing",
    "ПредставлениеСобытияЖурналаРегистрации", "EventLogEventPresentation",
    "ВыгрузитьЖурналРегистрации", "UnloadEventLog",
    "ПолучитьЗначенияОтбораЖурналаРегистрации", "GetEventLogFilterValues",
    "УстановитьИспользованиеСобытияЖурналаРегистрации", "SetEventLogEventUse",
    "ПолучитьИспользованиеСобытияЖурналаРегистрации", "GetEventLogEventUse",
    "СкопироватьЖурналРегистрации", "CopyEventLog",
    "ОчиститьЖурналРегистрации", "ClearEventLog",
    // Процедуры и функции работы с универсальными объектами
    "ЗначениеВДанныеФормы", "ValueToFormData",
    "ДанныеФормыВЗначение", "FormDataToValue",
    "КопироватьДанныеФормы", "CopyFormData",
    "УстановитьСоответствиеОбъектаИФормы", "SetObjectAndFormConformity",
    "ПолучитьСоответствиеОбъектаИФормы", "GetObjectAndFormConformity",
    // Процедуры и функции работы с функциональными опциями
    "ПолучитьФункциональнуюОпцию", "GetFunctionalOption",
    "ПолучитьФункциональнуюОпциюИнтерфейса", "GetInterfaceFunctionalOption",
    "УстановитьПараметрыФункциональныхОпцийИнтерфейса", "SetInterfaceFunctionalOptionParameters",
    "ПолучитьПараметрыФункциональныхОпцийИнтерфейса", "GetInterfaceFunctionalOptionParameters",
    "ОбновитьИнтерфейс", "RefreshInterface",
    // Процедуры и функции работы с криптографией
    "УстановитьРасширениеРаботыСКриптографией", "InstallCryptoExtension",
    "НачатьУстановкуРасширенияРаботыСКриптографией", "BeginInstallCryptoExtension",
    "ПодключитьРасширениеРаботыСКриптографией", "AttachCryptoExtension",
    "НачатьПодключениеРасширенияРаботыСКриптографией", "BeginAttachingCryptoExtension",
    // Процедуры и функции работы со стандартным интерфейсом OData
    "УстановитьСоставСтандартногоИнтерфейсаOData", "SetStandardODataInterfaceContent",
    "ПолучитьСоставСтандартногоИнтерфейсаOData", "GetStandardODataInterfaceContent",
    // Процедуры и функции работы с двоичными данными
    "СоединитьБуферыДвоичныхДанных", "ConcatBinaryDataBuffers",
    // Прочие процедуры и функции
    "Мин", "Min",
    "Макс", "Max",
    "ОписаниеОшибки", "ErrorDescription",
    "Вычислить", "Eval",
    "ИнформацияОбОшибке", "ErrorInfo",
    "Base64Значение", "Base64Value",
    "Base64Строка", "Base64String",
    "ЗаполнитьЗначенияСвойств", "FillPropertyValues",
    "ЗначениеЗаполнено", "ValueIsFilled",
    "ПолучитьПредставленияНавигационныхСсылок", "GetURLsPresentations",
    "НайтиОкноПоНавигационнойСсылке", "FindWindowByURL",
    "ПолучитьОкна", "GetWindows",
    "ПерейтиПоНавигационнойСсылке", "GotoURL",
    "ПолучитьНавигационнуюСсылку", "GetURL",
    "ПолучитьДопустимыеКодыЛокализации", "GetAvailableLocaleCodes",
    "ПолучитьНавигационнуюСсылкуИнформационнойБазы", "GetInfoBaseURL",
    "ПредставлениеКодаЛокализации", "LocaleCodePresentation",
    "ПолучитьДопустимыеЧасовыеПояса", "GetAvailableTimeZones",
    "ПредставлениеЧасовогоПояса", "TimeZonePresentation",
    "ТекущаяУниверсальнаяДата", "CurrentUniversalDate",
    "ТекущаяУниверсальнаяДатаВМиллисекундах", "CurrentUniversalDateInMilliseconds",
    "МестноеВремя", "ToLocalTime",
    "УниверсальноеВремя", "ToUniversalTime",
    "ЧасовойПояс", "TimeZone",
    "СмещениеЛетнегоВремени", "DaylightTimeOffset",
    "СмещениеСтандартногоВремени", "StandardTimeOffset",
    "КодироватьСтроку", "EncodeString",
    "РаскодироватьСтроку", "DecodeString",
    "Найти", "Find",
    // События приложения и сеанса
    "ПередНачаломРаботыСистемы", "BeforeStart",
    "ПриНачалеРаботыСистемы", "OnStart",
    "ПередЗавершениемРаботыСистемы", "BeforeExit",
    "ПриЗавершенииРаботыСистемы", "OnExit",
    "ОбработкаВнешнегоСобытия", "ExternEventProcessing",
    "УстановкаПараметровСеанса", "SessionParametersSetting",
    "ПриИзмененииПараметровЭкрана", "OnChangeDisplaySettings",
];

pub static BUILTINS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(BUILTIN_WORDS)
        .without(&CALL_ONLY)
        .without(&CONSTRUCTORS)
        .without(&EXCEPTIONS)
});

/// Глобальный контекст - свойства
const CLASS_WORDS: &[&str] = &[
    // Свойства (классы)
    "WSСсылки", "WSReferences",
    "БиблиотекаКартинок", "PictureLib",
    "БиблиотекаМакетовОформленияКомпоновкиДанных", "DataCompositionAppearanceTemplateLib",
    "БиблиотекаСтилей", "StyleLib",
    "БизнесПроцессы", "BusinessProcesses",
    "ВнешниеИсточникиДанных", "ExternalDataSources",
    "ВнешниеОбработки", "ExternalDataProcessors",
    "ВнешниеОтчеты", "ExternalReports",
    "Документы", "Documents",
    "ДоставляемыеУведомления", "DeliverableNotifications",
    "ЖурналыДокументов", "DocumentJournals",
    "Задачи", "Tasks",
    "ИспользованиеРабочейДаты", "WorkingDateUse",
    "ИсторияРаботыПользователя", "UserWorkHistory",
    "Константы", "Constants",
    "КритерииОтбора", "FilterCriteria",
    "Метаданные", "Metadata",
    "Обработки", "DataProcessors",
    "ОтправкаДоставляемыхУведомлений", "DeliverableNotificationSend",
    "Отчеты", "Reports",
    "ПараметрыСеанса", "SessionParameters",
    "Перечисления", "Enums",
    "ПланыВидовРасчета", "ChartsOfCalculationTypes",
    "ПланыВидовХарактеристик", "ChartsOfCharacteristicTypes",
    "ПланыОбмена", "ExchangePlans",
    "ПланыСчетов", "ChartsOfAccounts",
    "ПолнотекстовыйПоиск", "FullTextSearch",
    "ПользователиИнформационнойБазы", "InfoBaseUsers",
    "Последовательности", "Sequences",
    "РасширенияКонфигурации", "ConfigurationExtensions",
    "РегистрыБухгалтерии", "AccountingRegisters",
    "РегистрыНакопления", "AccumulationRegisters",
    "РегистрыРасчета", "CalculationRegisters",
    "РегистрыСведений", "InformationRegisters",
    "РегламентныеЗадания", "ScheduledJobs",
    "СериализаторXDTO", "XDTOSerializer",
    "Справочники", "Catalogs",
    "СредстваГеопозиционирования", "LocationTools",
    "СредстваКриптографии", "CryptoToolsManager",
    "СредстваМультимедиа", "MultimediaTools",
    "СредстваПочты", "MailTools",
    "СредстваТелефонии", "TelephonyTools",
    "ФабрикаXDTO", "XDTOFactory",
    "ФоновыеЗадания", "BackgroundJobs",
    "ХранилищаНастроек", "SettingsStorages",
    "ВстроенныеПокупки", "InAppPurchases",
    "ОтображениеРекламы", "AdRepresentation",
    "ПанельЗадачОС", "OSTaskbar",
    "ПроверкаВстроенныхПокупок", "InAppPurchasesValidation",
    // Свойства (переменные)
    "ГлавныйИнтерфейс", "MainInterface",
    "ГлавныйСтиль", "MainStyle",
    "ПараметрЗапуска", "LaunchParameter",
    "РабочаяДата", "WorkingDate",
    "ХранилищеВариантовОтчетов", "ReportsVariantsStorage",
    "ХранилищеНастроекДанныхФорм", "FormDataSettingsStorage",
    "ХранилищеОбщихНастроек", "CommonSettingsStorage",
    "ХранилищеПользовательскихНастроекДинамическихСписков", "DynamicListsUserSettingsStorage",
    "ХранилищеПользовательскихНастроекОтчетов", "ReportsUserSettingsStorage",
    "ХранилищеСистемныхНастроек", "SystemSettingsStorage",
];

pub static CLASSES: Lazy<WordSet> = Lazy::new(|| WordSet::new(CLASS_WORDS).without(&CALL_ONLY));

/// Корни обращений к объектам метаданных: `Справочники.Имя.…`
pub static METADATA_ROOTS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Справочники", "Catalogs", "Документы", "Documents",
        "Перечисления", "Enums", "Константы", "Constants",
        "РегистрыСведений", "InformationRegisters",
        "РегистрыНакопления", "AccumulationRegisters",
        "РегистрыБухгалтерии", "AccountingRegisters",
        "РегистрыРасчета", "CalculationRegisters",
        "ПланыСчетов", "ChartsOfAccounts",
        "ПланыВидовХарактеристик", "ChartsOfCharacteristicTypes",
        "ПланыВидовРасчета", "ChartsOfCalculationTypes",
        "ПланыОбмена", "ExchangePlans",
        "БизнесПроцессы", "BusinessProcesses", "Задачи", "Tasks",
        "Отчеты", "Reports", "Обработки", "DataProcessors",
        "ЖурналыДокументов", "DocumentJournals",
        "Последовательности", "Sequences",
        "КритерииОтбора", "FilterCriteria",
        "ВнешниеОбработки", "ExternalDataProcessors",
        "ВнешниеОтчеты", "ExternalReports",
        "ВнешниеИсточникиДанных", "ExternalDataSources",
        "ПараметрыСеанса", "SessionParameters",
        "РегламентныеЗадания", "ScheduledJobs",
        "ХранилищаНастроек", "SettingsStorages",
        "WSСсылки", "WSReferences",
        "Метаданные", "Metadata",
    ])
});

/// Типы, допустимые после `Новый`
pub static CONSTRUCTIBLE_TYPES: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Массив", "Array", "ФиксированныйМассив", "FixedArray",
        "Структура", "Structure", "ФиксированнаяСтруктура", "FixedStructure",
        "Соответствие", "Map", "ФиксированноеСоответствие", "FixedMap",
        "СписокЗначений", "ValueList", "ТаблицаЗначений", "ValueTable",
        "ДеревоЗначений", "ValueTree", "ХранилищеЗначения", "ValueStorage",
        "ОписаниеТипов", "TypeDescription",
        "КвалификаторыСтроки", "StringQualifiers",
        "КвалификаторыЧисла", "NumberQualifiers",
        "КвалификаторыДаты", "DateQualifiers",
        "КвалификаторыДвоичныхДанных", "BinaryDataQualifiers",
        "Запрос", "Query", "ПостроительЗапроса", "QueryBuilder",
        "СхемаЗапроса", "QuerySchema",
        "МенеджерВременныхТаблиц", "TempTablesManager",
        "БлокировкаДанных", "DataLock",
        "ОписаниеОповещения", "NotifyDescription",
        "УникальныйИдентификатор", "UUID",
        "ЧтениеJSON", "JSONReader", "ЗаписьJSON", "JSONWriter",
        "ЧтениеXML", "XMLReader", "ЗаписьXML", "XMLWriter",
        "ЧтениеТекста", "TextReader", "ЗаписьТекста", "TextWriter",
        "ТекстовыйДокумент", "TextDocument",
        "ТабличныйДокумент", "SpreadsheetDocument",
        "ДвоичныеДанные", "BinaryData", "Файл", "File",
        "HTTPСоединение", "HTTPConnection",
        "HTTPЗапрос", "HTTPRequest", "HTTPСервисОтвет", "HTTPServiceResponse",
        "ИнтернетПочтовоеСообщение", "InternetMailMessage",
        "ЗащищенноеСоединениеOpenSSL", "OpenSSLSecureConnection",
        "COMОбъект", "COMObject",
        "Цвет", "Color", "Шрифт", "Font", "Рамка", "Border", "Картинка", "Picture",
        "СтандартныйПериод", "StandardPeriod",
        "ПостроительОтчета", "ReportBuilder",
        "КомпоновщикМакетаКомпоновкиДанных", "DataCompositionTemplateComposer",
        "ПроцессорКомпоновкиДанных", "DataCompositionProcessor",
        "ПроцессорВыводаРезультатаКомпоновкиДанныхВКоллекциюЗначений",
        "DataCompositionResultValueCollectionOutputProcessor",
        "НастройкиКомпоновкиДанных", "DataCompositionSettings",
        "ГенераторСлучайныхЧисел", "RandomNumberGenerator",
        "ХешированиеДанных", "DataHashing",
        "РегулярноеВыражение", "RegEx",
    ])
});

/// Символы условной компиляции в `#Если … Тогда`
pub static PREPROC_SYMBOLS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Клиент", "Client", "НаКлиенте", "AtClient",
        "Сервер", "Server", "НаСервере", "AtServer",
        "ТолстыйКлиентОбычноеПриложение", "ThickClientOrdinaryApplication",
        "ТолстыйКлиентУправляемоеПриложение", "ThickClientManagedApplication",
        "ТонкийКлиент", "ThinClient", "ВебКлиент", "WebClient",
        "ВнешнееСоединение", "ExternalConnection",
        "МобильноеПриложениеКлиент", "MobileAppClient",
        "МобильноеПриложениеСервер", "MobileAppServer",
        "МобильныйКлиент", "MobileClient",
        "МобильныйАвтономныйСервер", "MobileStandaloneServer",
    ])
});

pub static PREPROC_WORDS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&["И", "AND", "ИЛИ", "OR", "НЕ", "NOT", "Тогда", "Then"])
});

/// Аннотации расширений, чей аргумент - имя перехватываемого метода
pub static EXTENSION_HOOKS: Lazy<WordSet> = Lazy::new(|| {
    WordSet::new(&[
        "Перед", "Before", "После", "After", "Вместо", "Around",
        "ИзменениеИКонтроль", "ChangeAndValidate",
    ])
});

pub static PARAM_MODIFIERS: Lazy<WordSet> = Lazy::new(|| WordSet::new(&["Знач", "Val"]));

/// Функции, первым аргументом которых бывает мультиязычная строка
pub static LOCALIZATION_CALLS: Lazy<WordSet> = Lazy::new(|| WordSet::new(&["НСтр", "NStr"]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order() {
        assert_eq!(classify_word("ВызватьИсключение"), Some(WordClass::Exception));
        assert_eq!(classify_word("RAISE"), Some(WordClass::Exception));
        assert_eq!(classify_word("Новый"), Some(WordClass::Constructor));
        assert_eq!(classify_word("строка"), Some(WordClass::CallOnly));
        assert_eq!(classify_word("Перем"), Some(WordClass::Declaration));
        assert_eq!(classify_word("null"), Some(WordClass::Constant));
        assert_eq!(classify_word("КонецЕсли"), Some(WordClass::Keyword));
        assert_eq!(classify_word("СтрДлина"), Some(WordClass::Builtin));
        assert_eq!(classify_word("Справочники"), Some(WordClass::Class));
        assert_eq!(classify_word("МояПеременная"), None);
    }

    #[test]
    fn test_overlapping_tables_are_disjoint() {
        for word in ["Строка", "Число", "Дата", "Булево", "Тип", "Новый"] {
            assert!(!BUILTINS.contains(word), "{word} leaked into builtins");
            assert!(!CLASSES.contains(word), "{word} leaked into classes");
        }
        assert!(!KEYWORDS.contains("ВызватьИсключение"));
    }

    #[test]
    fn test_bilingual_tables() {
        assert!(BUILTINS.contains("Сообщить") && BUILTINS.contains("Message"));
        assert!(BUILTINS.contains("НачатьТранзакцию") && BUILTINS.contains("BeginTransaction"));
        assert!(BUILTINS.contains("ТипЗнч") && BUILTINS.contains("TypeOf"));
        assert!(CLASSES.contains("ХранилищеПользовательскихНастроекДинамическихСписков"));
        assert!(METADATA_ROOTS.contains("catalogs"));
    }
}
