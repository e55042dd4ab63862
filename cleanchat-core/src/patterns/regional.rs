//! Cyrillic and other regional-language rules.
//!
//! Compiled between script-aware boundaries that treat Cyrillic and accented
//! Latin letters as word characters.

use super::Rule;

/// Regional rules in evaluation order.
pub const REGIONAL: &[Rule] = &[
    Rule::Template(r"suga ?pul[{ro_a}]"),
    Rule::Template(r"muie"),
    Rule::Template(r"s[{ro_a}] ?te ?fut"),
    Rule::Template(r"futu-?[{ro_t}]i ?pizda"),
    Rule::RichOnly(r"pulă"),
    Rule::Template(r"ci+p(?:a{2,}|ę|ą|k(?:ami|[{pl_a}]|[{pl_e}]|i|owate|o)|ek|eczka|usie[{pl_n}]ka|ule[{pl_n}]ka)"),
    Rule::Template(r"chu{2,}j"),
    Rule::Template(r"chuj(?:u|ek?|ami|a)"),
    Rule::Template(r"(?:ten|w) chuj|chuj wie"),
    Rule::Template(r"c?huj (?:ci|wam|w dupe)(?: w dupe)?"),
    Rule::Template(r"c *h *u *j *[eua]"),
    Rule::Template(r"huj[aeu]"),
    Rule::Template(r"huj ?pizda"),
    Rule::Template(r"cycki"),
    Rule::Template(r"kutas(?:y|ami|iarzu?)?"),
    Rule::Template(r"pornosy?"),
    Rule::Template(r"dziwk(?:ami|om|[{pl_a}{pl_e}io])"),
    Rule::Template(r"k[.*]+rwa"),
    Rule::Template(r"kurwa ?ma[{pl_c}]"),
    Rule::Template(r"k *u *r *w *a(?: m a [{pl_c}])?"),
    Rule::Template(r"k[{pl_u}]+r[w*](?:ie|ami|y+|[{pl_e}]+|[{pl_a}]+|om|o+)x*"),
    Rule::Template(r"ku{sep2num}+r?w(a+|o+)"),
    Rule::Template(r"ku[*]{2,}a+"),
    Rule::Template(r"{spaced:kurwa}"),
    Rule::Template(r"wkurwi[{pl_l}][ay]?"),
    Rule::Template(r"wkurwia*(?:sz|my?|j[{pl_a}]?|[{pl_c}])?"),
    Rule::Template(r"skurwiel(?:em?|ami|i|a)?"),
    Rule::Template(r"pi[z*]d[{pl_a}{ro_a}{pl_e}y]"),
    Rule::Template(r"(?:roz|ja|s|wy?)?pierd[o*]l(?:[{pl_e}]|i?cie|isz|i[{pl_l}](?:[ao]|[ae][{pl_s}])|i[{pl_c}]|eni|e|on[eay]| si[{pl_e}])?"),
    Rule::Template(r"roz[*]+ba[{pl_c}]"),
    Rule::Template(r"(?:s|za|wy?)pier?(?:[d*]a|[da*])la(?:jcie|j[{pl_a}]?|my?|cie|[{pl_c}])?"),
    Rule::Template(r"(?:s|za|wy?)pieprza(j|[{pl_c}]|j[{pl_a}]|jmy)"),
    Rule::Template(r"z?g[wf]a[u{pl_l}](?:t|tem|ty|tów|tami|cenie?|ceni|con[aey]|c[eoąi]|[{pl_c}]my|ci[{pl_c}]|ci[{pl_l}]+[iay]|cimy?)"),
    Rule::Template(r"(?:za|wy|z|u|na|prze|po|roz|przy)?je+[b*](?:ie(?:sz|my)?|i[{pl_a}]|a+[*]?n[yaei]+(?:mi|m|go)?|a[{pl_l}][aeiyo][m{pl_s}]?|a+[{pl_c}{pl_l}]|a[{pl_n}]ce)"),
    Rule::Template(r"jeb(?: ma[{pl_l}]e)? dzieci"),
    Rule::Template(r"(?:wy)?r{sep2num}*ucha(?:my?|jmy|jcie|j[{pl_a}]?|[{pl_c}]|nym?|n[ae]|nie?)"),
    Rule::Template(r"peda(?:le|lsk(?:ie|im|i|a)?)"),
    Rule::RichOnly(r"pe[d*]ał(?:y|a|em|ami|[{pl_u}*]w)?"),
    Rule::RichOnly(r"gówn(?:o|a|iaki?)"),
    Rule::RichOnly(r"suką+"),
    Rule::RichOnly(r"żesz chuj"),
    Rule::RichOnly(r"fapać"),
    Rule::Template(r"s *p *i *e *r *d *a *l *a *j"),
    Rule::Template(r"p *i *e *r *d *o *l *e"),
    Rule::Template(r"j *e *b *a *n *[aeyi]"),
    Rule::Template(r"p *i *e *p *r *z *s *i *e"),
    Rule::Template(r"g *w *a *[{pl_l}] *t"),
    Rule::Template(r"fapie"),
    Rule::Template(r"zabij ?si[{pl_e}]"),
    Rule::Template(r"wejd[{pl_e}] w ciebie"),
    Rule::Template(r"w dup[{pl_e}]"),
    Rule::Template(r"morda psie"),
    Rule::Template(r"s[.]*u[.]*k+aa+"),
    Rule::Template(r"s[.]*u[.]*k[.]*k+a+"),
    Rule::Template(r"su ka"),
    Rule::RichOnly(r"coño+"),
    Rule::RichOnly(r"srát"),
    Rule::RichOnly(r"piča"),
    Rule::Template(r"sikiyimmi(?: seni)?"),
    Rule::RichOnly(r"göt(?: ?k[ıI]l[ıI]| ?veren)?"),
    Rule::RichOnly(r"orospu(?: ?çocuğu)?"),
    Rule::RichOnly(r"(?:anan[ıI] ?|ecdad[ıI]n[ıI] ?)?sikiyim"),
    Rule::RichOnly(r"ana?nı sikim"),
    Rule::RichOnly(r"am[ıI]na ?koyayim"),
    Rule::RichOnly(r"amc[ıI]k"),
    Rule::RichOnly(r"yarra[ğg][ıI]m[ıI](?: ?ye)?"),
    Rule::RichOnly(r"sikiş"),
    Rule::Template(r"seni ?sikerim"),
    Rule::Template(r"sikiyim"),
    Rule::Template(r"siktir(?: ?git)?"),
    Rule::Template(r"yarrak(?: ?kafa)?"),
    Rule::Template(r"orospu"),
    Rule::Template(r"cy[k*]a ?(?:bl(?:ye|a|ie+)t+|bylat|blyt|blayt|bl[*]at)"),
    Rule::Template(r"[sc][uy]ka ?bl[yiue]*?a[td]?"),
    Rule::Template(r"b-?l-?y-?a-?d"),
    Rule::Template(r"pisda"),
    Rule::Template(r"bly+a+t+"),
    Rule::Template(r"blya{3,}"),
    Rule::Template(r"c[*]{2,}a"),
    Rule::Template(r"cykablye+t"),
    Rule::Template(r"cykaxd+"),
    Rule::Template(r"cyak ?blyat"),
    Rule::Template(r"ckya"),
    Rule::Template(r"{spaced:blyat}"),
    Rule::Template(r"{spaced:cyka}"),
    Rule::Template(r"(?:cyka)+"),
    Rule::Template(r"c ?ica blia"),
    Rule::Template(r"govno+"),
    Rule::RichOnly(r"б/?\\yat"),
    Rule::RichOnly(r"суда вручат"),
    Rule::RichOnly(r"анал(?:ьные)?"),
    Rule::RichOnly(r"а +н +а +л"),
    Rule::RichOnly(r"бля(?:ть)?ъ"),
    Rule::RichOnly(r"(?!бл ять|б лять){spaced:блять}э?"),
    Rule::RichOnly(r"[cс][yу][0-9]*[kк][aа]+"),
    Rule::RichOnly(r"{spaced:сука}"),
    Rule::RichOnly(r"су[0-9]ка"),
    Rule::RichOnly(r"су[57]+а"),
    Rule::RichOnly(r"с{sep2}+ч?ка|су{sep2}+а|сук[{emoji}:;|`@#$%^&*_=+~\-\\/\\]+"),
    Rule::RichOnly(r"[сc][*]{2,}[аa]"),
    Rule::RichOnly(r"с[*]{3,}"),
    Rule::RichOnly(r"сцука+"),
    Rule::RichOnly(r"Сюка"),
    Rule::RichOnly(r"[*]+ка"),
    Rule::RichOnly(r"с+у+к+и+н?"),
    Rule::RichOnly(r"сук[оo0]+"),
    Rule::RichOnly(r"секс(?:ам|а+|е|у|ом)?"),
    Rule::RichOnly(r"срать"),
    Rule::RichOnly(r"(?:вы|по)?е[б6]+[*]?(?:у|учая|ётесь|а?ться|а+т[ьъ]+|ало?м?ъ?|на|ались|аные|ан+ая|[*])"),
    Rule::RichOnly(r"(?:вы|по)?е[б6]+{sep2}(?:у|тесь|ться|ть|лись|ные|н+ая|чий|чие)"),
    Rule::RichOnly(r"е[б6]етс"),
    Rule::RichOnly(r"я *ебаl"),
    Rule::RichOnly(r"выепать"),
    Rule::RichOnly(r"влагалища"),
    Rule::RichOnly(r"вибратора?"),
    Rule::RichOnly(r"е{sep2}?[б6]{sep2}?[ёуа]{sep2}?ть?"),
    Rule::RichOnly(r"е[б6](?:ать?ся+|ёнок|.ть|анный|алом?ъ?|нулся|нутая|анутся)"),
    Rule::RichOnly(r"з[б6]ать"),
    Rule::RichOnly(r"бл[*]{2,}ь"),
    Rule::RichOnly(r"б[л*]я(?:.ь|[яа]*)"),
    Rule::RichOnly(r"(?:е|лэ)?б+[лl]+[я*]+(?:ч|т+ь+э?|т+б*|дина|ди|дь|дя)?"),
    Rule::RichOnly(r"б(?:л{sep2}|{sep2}я+|{sep2}{2})ть"),
    Rule::RichOnly(r"бл[эая]ть"),
    Rule::RichOnly(r"б[*]+[ья]+"),
    Rule::RichOnly(r"зае[б6](али?|лся)"),
    Rule::RichOnly(r"з[*]ебуьс"),
    Rule::RichOnly(r"е[б6]а"),
    Rule::RichOnly(r"е[*]б"),
    Rule::RichOnly(r"{spaced:заебал::sep2}"),
    Rule::RichOnly(r"{spaced:бля::sep2}"),
    Rule::RichOnly(r"з[а_*]еб[а_*]ли?"),
    Rule::RichOnly(r"б *л *я"),
    Rule::RichOnly(r"вы[*]+"),
    Rule::RichOnly(r"говно+м?"),
    Rule::RichOnly(r"мать твою"),
    Rule::RichOnly(r"онанист"),
    Rule::RichOnly(r"орг(?:ия|азм)"),
    Rule::RichOnly(r"охуительны(х|е)"),
    Rule::RichOnly(r"о[б6]осса(на|ть)"),
    Rule::RichOnly(r"шалаву"),
    Rule::RichOnly(r"ш{sep2}?л{sep2}?ю{sep2}?(шк[аa]+|[хx]и|[хx][аa]+)"),
    Rule::RichOnly(r"ш +л +ю +(ш +к +а|х +[иа])"),
    Rule::RichOnly(r"шл[_*]ха"),
    Rule::RichOnly(r"пенис"),
    Rule::RichOnly(r"потрахались"),
    Rule::RichOnly(r"тр[а@*]х(атьс(еб)?я|аьт|нула|алаъ)"),
    Rule::RichOnly(r"дрочить"),
    Rule::RichOnly(r"порнухой"),
    Rule::RichOnly(r"изн[ак]силую"),
    Rule::RichOnly(r"у?пи[*]?[3з{emoji}]+д(?:абол(?:ка?)?|ое[б6]+учий|овать|овал|олизка|ы|а|ецъ?|е|юк|уйте|уй|ос?)"),
    Rule::RichOnly(r"п[_*]здец"),
    Rule::RichOnly(r"письки"),
    Rule::RichOnly(r"киск[иеуа]"),
    Rule::RichOnly(r"сперму"),
    Rule::RichOnly(r"кончи(?:л|шь)"),
    Rule::RichOnly(r"пид[о0]+р(ы|а[зс])?"),
    Rule::RichOnly(r"п{sep2}здуй"),
    Rule::RichOnly(r"ниггеров"),
    Rule::RichOnly(r"мудак[аи]?"),
    Rule::RichOnly(r"лохи"),
    Rule::RichOnly(r"соси писос"),
    Rule::RichOnly(r"сосу член"),
    Rule::RichOnly(r"члено(?:м|соса?)"),
    Rule::RichOnly(r"(?:иди)?на[хx]уй"),
    Rule::RichOnly(r"[хx]{sep}ль"),
    Rule::RichOnly(r"[хx]ерню"),
    Rule::RichOnly(r"(?:н[аa])?[хx][уy*]+[йи]+(?:ло|ка|э|у+|ъ+|н[ёе]й|н[юя]?)?"),
    Rule::RichOnly(r"н[.]*а[.]*х[.]*у[.]*[йи]"),
    Rule::RichOnly(r"(?:ху[йя])+"),
    Rule::RichOnly(r"ху[\\/]*ли"),
    Rule::RichOnly(r"х[_.*]ли"),
    Rule::RichOnly(r"ху{sep}+[йи]"),
    Rule::RichOnly(r"[хx]+{sep}?у+{sep}?[йия]+{sep}?у*"),
    Rule::RichOnly(r"[хx][{emoji}](?:[йия]|ёв)"),
    Rule::RichOnly(r"[хx]у[{emoji}]"),
    Rule::RichOnly(r"на(?:{sep2}у|х{sep2})[йи]"),
    Rule::RichOnly(r"(?:ни|на|ha)?хер(?:а|ней)?"),
    Rule::RichOnly(r"(?:по|идина)?х(?:у|{sep2})[йию](?:ло|лестия)?"),
    Rule::RichOnly(r"(?:по|на)\)\(у[йию]"),
    Rule::RichOnly(r"мастурбация"),
    Rule::RichOnly(r"[хx] *{sep2}+ *у *{sep2}+ *й"),
    Rule::RichOnly(r"п(?:а|{sep2})дика"),
    Rule::RichOnly(r"насил(?:ьник|уют)"),
    Rule::RichOnly(r"ни[хx]уя"),
    Rule::RichOnly(r"на[*]+й"),
    Rule::RichOnly(r"н[*]{3,}й"),
    Rule::RichOnly(r"насрать"),
    Rule::RichOnly(r"дерьмо"),
    Rule::RichOnly(r"дебилы?"),
    Rule::RichOnly(r"ты еб"),
    Rule::RichOnly(r"хуе"),
    Rule::RichOnly(r"за(?:сранец|лупа|дницу)"),
    Rule::RichOnly(r"гавном?"),
    Rule::RichOnly(r"т{sep2}?р{sep2}?а+{sep2}?[хx](?:ни(?:те)?|нуть|ну|ает|а+ть)?(?: (?:тебя|меня))?"),
    Rule::RichOnly(r"жоп(?:у|ай?)"),
    Rule::RichOnly(r"про[е{emoji}]бал(?:ся)?"),
    Rule::RichOnly(r"анал"),
    Rule::RichOnly(r"3===+э"),
    Rule::RichOnly(r"зиг ха[ий]?ль"),
    Rule::RichOnly(r"(?:на|г|б)[*]{2,}"),
    Rule::RichOnly(r"(?:наша|нас|моя|моей) ?(?:территори[яи]|терра)"),
    Rule::RichOnly(r"кунт"),
    Rule::RichOnly(r"х[*]{2,}"),
    Rule::RichOnly(r"[Ъb][*іi][тt][cc][нh]"),
    Rule::RichOnly(r"\)\({sep}?у+{sep}?[йия]+{sep}?у*"),
    Rule::RichOnly(r"fuск\S*"),
    Rule::Template(r"b[i!]tc\|-\|"),
    Rule::Template(r"di(?:l|\|_)d(?:o|\(\))"),
    Rule::Template(r"(?<!grammar )n[a4]z[i1]s?"),
    Rule::Template(r"fu[*-]{2}"),
    Rule::Template(r"sh[*-]{2}"),
    Rule::Template(r"wh[o0]r3s?"),
    Rule::Template(r"\*{4}(?:ed|ing)"),
    Rule::Template(r"\|\\\| *[i1] *[g9] *[g9] *e *rs?"),
    Rule::Template(r"[$]+(?:hit|perm|luts?|uck(?:ing)?|ex)"),
    Rule::Template(r"tit"),
    Rule::Template(r"[a@]+[s$]{2,}"),
    Rule::Template(r"pi[$]{2,}"),
    Rule::Template(r"[abcdfsn][*#]{2,}"),
    Rule::Template(r"bit?[*]{2,}"),
    Rule::Template(r"fu[*]+"),
    Rule::Template(r"bic[*]+"),
    Rule::Template(r"\*+(?:ck)?ing"),
    Rule::Template(r"(?<!-)se[*]"),
    Rule::Template(r"(?:di|sh|ra|bi)[*]{2,}"),
    Rule::Template(r"\*sshole"),
    Rule::Template(r"\*{3}hole"),
    Rule::Template(r"/\|/iggers?"),
    Rule::Template(r"su\(\("),
    Rule::Template(r"d[i!1](?:\(\(|\|<)"),
    Rule::Template(r"c{anyO}c\|<"),
    Rule::Template(r"f[o0][ck]\("),
    Rule::Template(r"f[o0]\([ck]"),
    Rule::Template(r"f [o0] \( [ck]"),
    Rule::Template(r"{c}{o}{c}{k}"),
    Rule::Template(r"w{h}{o}r{e}"),
    Rule::Template(r"ファックユー?"),
];
